use sea_orm::{DbBackend, DbErr, Statement, Value};

/// Positional placeholder for the 1-based `position` on `backend`.
pub fn placeholder(backend: DbBackend, position: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${position}"),
        DbBackend::MySql | DbBackend::Sqlite => "?".to_string(),
    }
}

/// Rewrite `:name` parameters in `sql` into positional placeholders for
/// `backend`, binding values from `params` in order of appearance.
///
/// Text inside single quotes is copied verbatim, and `::` (a Postgres cast)
/// is not treated as a parameter. A name missing from `params` is an error.
pub fn bind_named(
    backend: DbBackend,
    sql: &str,
    params: &[(&str, Value)],
) -> Result<Statement, DbErr> {
    let mut rendered = String::with_capacity(sql.len());
    let mut values = Vec::new();
    let mut chars = sql.char_indices().peekable();
    let mut in_quote = false;

    while let Some((idx, ch)) = chars.next() {
        if ch == '\'' {
            in_quote = !in_quote;
            rendered.push(ch);
            continue;
        }
        if in_quote || ch != ':' {
            rendered.push(ch);
            continue;
        }
        if let Some((_, ':')) = chars.peek() {
            chars.next();
            rendered.push_str("::");
            continue;
        }

        let start = idx + ch.len_utf8();
        let mut end = start;
        while let Some(&(next_idx, next)) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                end = next_idx + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        if start == end {
            rendered.push(ch);
            continue;
        }

        let name = &sql[start..end];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| DbErr::Custom(format!("no value bound for parameter :{name}")))?;
        values.push(value);
        rendered.push_str(&placeholder(backend, values.len()));
    }

    Ok(Statement::from_sql_and_values(backend, &rendered, values))
}
