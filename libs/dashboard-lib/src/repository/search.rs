use sqlx::{MySql, QueryBuilder};

/// Splits free text on whitespace and commas into lowercase `LIKE` patterns.
pub(crate) fn search_patterns(search: &str) -> Vec<String> {
    search
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(|term| format!("%{}%", escape_like(&term.to_lowercase())))
        .collect()
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Appends one `AND (LOWER(col) LIKE ? OR ...)` group per search term, so
/// every term has to match at least one of `columns`.
pub(crate) fn push_search(qb: &mut QueryBuilder<'_, MySql>, columns: &[&str], search: Option<&str>) {
    let Some(search) = search else {
        return;
    };

    for pattern in search_patterns(search) {
        qb.push(" AND (");
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                qb.push(" OR ");
            }
            qb.push("LOWER(")
                .push(*column)
                .push(") LIKE ")
                .push_bind(pattern.clone());
        }
        qb.push(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_commas() {
        assert_eq!(
            search_patterns("Health  officer,ADMIN"),
            vec!["%health%", "%officer%", "%admin%"]
        );
    }

    #[test]
    fn blank_search_yields_no_patterns() {
        assert!(search_patterns("   , ").is_empty());
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(search_patterns("50%_off"), vec![r"%50\%\_off%"]);
    }

    #[test]
    fn each_term_becomes_a_group() {
        let mut qb = QueryBuilder::<MySql>::new("SELECT id FROM roles WHERE 1 = 1");
        push_search(&mut qb, &["role_name", "description"], Some("lab admin"));
        assert_eq!(
            qb.sql(),
            "SELECT id FROM roles WHERE 1 = 1 \
             AND (LOWER(role_name) LIKE ? OR LOWER(description) LIKE ?) \
             AND (LOWER(role_name) LIKE ? OR LOWER(description) LIKE ?)"
        );
    }
}
