use sea_orm_migration::{prelude::*, sea_orm::DbBackend};

/// Pattern check on a text column.
///
/// SQLite only offers `GLOB`, the other engines take a regular expression.
pub(crate) fn matches<T: Iden>(backend: DbBackend, column: T, glob: &str, regex: &str) -> SimpleExpr {
    let column = column.to_string();
    match backend {
        DbBackend::Postgres => Expr::cust(format!("{column} ~ '{regex}'")),
        DbBackend::MySql => Expr::cust(format!("{column} REGEXP '{regex}'")),
        DbBackend::Sqlite => Expr::cust(format!("{column} GLOB '{glob}'")),
    }
}

/// `column` starts with `count` ASCII letters
pub(crate) fn leading_letters<T: Iden>(backend: DbBackend, column: T, count: usize) -> SimpleExpr {
    let glob = format!("{}*", "[A-Za-z]".repeat(count));
    let regex = format!("^[A-Za-z]{{{count}}}");
    matches(backend, column, &glob, &regex)
}

/// Column clause for a stepped server-generated key, where the engine has one
pub(crate) fn stepped_identity(backend: DbBackend, start: i32, step: i32) -> Option<String> {
    match backend {
        DbBackend::Postgres => Some(format!(
            "GENERATED BY DEFAULT AS IDENTITY (START WITH {start} INCREMENT BY {step})"
        )),
        // No per-table increment; keys are allocated by the inserting transaction
        DbBackend::MySql | DbBackend::Sqlite => None,
    }
}
