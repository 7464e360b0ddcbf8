//! Parsing of REPL input lines.
//!
//! A line is `action` or `action?key1=value1&key2=value2`. Only the first `?`
//! separates the action; each pair splits on its first `=`, and a pair without
//! `=` maps to an empty value.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Register,
    List,
    Delete,
    Modify,
    Build,
    Exit,
    Unknown(String),
}

impl Action {
    pub fn parse(name: &str) -> Self {
        match name {
            "등록" => Action::Register,
            "목록" => Action::List,
            "삭제" => Action::Delete,
            "수정" => Action::Modify,
            "빌드" => Action::Build,
            "종료" => Action::Exit,
            other => Action::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub action: Action,
    params: HashMap<String, String>,
}

impl Request {
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim();
        let (action, query) = match line.split_once('?') {
            Some((action, query)) => (action, Some(query)),
            None => (line, None),
        };

        let params = query
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.trim().is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((k, v)) => (k.to_string(), v.to_string()),
                        None => (pair.to_string(), String::new()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            action: Action::parse(action),
            params,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    /// Ids are positive; anything that is not a non-negative integer is `None`.
    pub fn get_id(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(|v| v.parse().ok())
    }
}
