//! Lookup helpers over decoded form bodies that repeat keys or carry dynamic fields.
//!
//! Handlers that need this take `web::Form<Vec<(String, String)>>`, which keeps
//! every pair in document order.

pub type FormPairs = Vec<(String, String)>;

pub fn get_field<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

pub fn get_all<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params.iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Value of every field whose name is `prefix` followed by something, keyed by the rest.
pub fn get_prefixed<'a>(params: &'a [(String, String)], prefix: &str) -> Vec<(&'a str, &'a str)> {
    params.iter()
        .filter_map(|(k, v)| k.strip_prefix(prefix).map(|rest| (rest, v.as_str())))
        .collect()
}
