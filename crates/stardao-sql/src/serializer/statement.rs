use super::{Comma, Formatter, Ident, Params, ToSql};

use stardao_core::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Query(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);

        if self.columns.is_empty() {
            if f.serializer.is_mysql() {
                fmt!(f, "INSERT INTO " table " () VALUES ()");
            } else {
                fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            }
        } else {
            let columns = Comma(self.columns.iter().map(Ident));
            let values = Comma(&self.values);

            fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
        }

        if !self.returning.is_empty() {
            let returning = Comma(self.returning.iter().map(Ident));
            fmt!(f, " RETURNING " returning);
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);
        let filter = &self.filter;

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(&self.column);
        let value = &self.value;

        fmt!(f, column " = " value);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " table filter);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let table = Ident(&self.table);
        let filter = &self.filter;

        fmt!(f, "SELECT " columns " FROM " table filter);
    }
}

/// Serializes as ` WHERE ...`, or nothing when the filter is empty.
impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = " WHERE ";
        for condition in &self.conditions {
            let column = Ident(&condition.column);
            let value = &condition.value;

            fmt!(f, s column " = " value);
            s = " AND ";
        }
    }
}
