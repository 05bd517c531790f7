//! Query shapes for the table API.
//!
//! The backend speaks PostgREST: columns go in `select`, ordering in
//! `order=<col>.<dir>`, and equality filters as `<col>=eq.<value>`.

/// Sort direction for an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// A read query against one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    columns: Vec<String>,
    order: Option<(String, Order)>,
    filters: Vec<(String, String)>,
    exact_count: bool,
}

impl Select {
    /// `select=*`
    pub fn all() -> Self {
        Self::default()
    }

    /// `select=a,b,c`
    pub fn columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    /// Newest rows first.
    pub fn recent_first(self) -> Self {
        self.order("created_at", Order::Desc)
    }

    /// Keep rows whose `column` equals `value`.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Ask the server for an exact row count alongside the rows.
    pub fn exact_count(mut self) -> Self {
        self.exact_count = true;
        self
    }

    pub fn wants_count(&self) -> bool {
        self.exact_count
    }

    /// Query-string pairs, in the order the server documents them.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let select = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(",")
        };

        let mut pairs = vec![("select".to_string(), select)];
        pairs.extend(self.filters.iter().cloned());
        if let Some((column, order)) = &self.order {
            pairs.push(("order".to_string(), format!("{column}.{}", order.as_str())));
        }
        pairs
    }
}

/// Rows plus the server-reported total, when one was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Counted<T> {
    pub rows: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Counted<T> {
    /// Total reported by the server, or the number of rows received.
    pub fn total_or_len(&self) -> u64 {
        self.total.unwrap_or(self.rows.len() as u64)
    }
}

/// Parse the total out of a `Content-Range` header (`0-9/10`, `*/0`).
///
/// Returns `None` when the server did not compute a total (`0-9/*`).
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_list_query_shape() {
        let select = Select::all().recent_first();
        assert_eq!(select.query_pairs(), owned(&[("select", "*"), ("order", "created_at.desc")]));
        assert!(!select.wants_count());
    }

    #[test]
    fn test_dashboard_query_shape() {
        let select = Select::columns(&["status", "priority"]).exact_count();
        assert_eq!(select.query_pairs(), owned(&[("select", "status,priority")]));
        assert!(select.wants_count());
    }

    #[test]
    fn test_filters_come_before_order() {
        let select = Select::all().eq("status", "open").order("title", Order::Asc);
        assert_eq!(
            select.query_pairs(),
            owned(&[("select", "*"), ("status", "eq.open"), ("order", "title.asc")])
        );
    }

    #[test]
    fn test_content_range() {
        assert_eq!(parse_content_range("0-9/10"), Some(10));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-24/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn test_total_falls_back_to_len() {
        let counted = Counted { rows: vec![1, 2, 3], total: None };
        assert_eq!(counted.total_or_len(), 3);
        let counted = Counted { rows: vec![1], total: Some(40) };
        assert_eq!(counted.total_or_len(), 40);
    }
}
