use super::{Flavor, Formatter, Params, ToSql};

/// A quoted identifier
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let quote = match f.serializer.flavor {
            Flavor::Mysql => '`',
            Flavor::Postgresql | Flavor::Sqlite => '"',
        };

        f.dst.push(quote);
        for c in self.0.as_ref().chars() {
            // Quotes inside an identifier are escaped by doubling them
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}
