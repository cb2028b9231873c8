use super::endpoint::Parameter;

use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameter values captured while recognizing a path.
///
/// Every parameter declared by the matched endpoint has an entry; a parameter
/// that matched no characters (an omitted optional segment) has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Box<str>, Option<String>); 8]>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if &**k == name { v.as_deref() } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Whether the endpoint declares `name`, matched or not.
    pub fn contains(&self, name: &str) -> bool {
        self.buf.iter().any(|(k, _)| &**k == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, v.as_deref()))
    }
}

impl Deref for Params {
    type Target = [(Box<str>, Option<String>)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl Params {
    pub(super) fn declare(params: &[Parameter]) -> Self {
        Self {
            buf: params.iter().map(|p| (p.name.clone(), None)).collect(),
        }
    }

    pub(super) fn push_char(&mut self, name: &str, ch: char) {
        match self.buf.iter_mut().find(|(k, _)| &**k == name) {
            Some((_, v)) => v.get_or_insert_with(String::new).push(ch),
            None => self.buf.push((name.into(), Some(ch.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Parameter, Params};

    #[test]
    fn declared_but_unmatched() {
        let decl = [
            Parameter::new("id", false, false),
            Parameter::new("page", true, false),
        ];
        let mut params = Params::declare(&decl);
        for ch in "42".chars() {
            params.push_char("id", ch);
        }

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.parse::<u32>("id"), Some(Ok(42)));
        assert!(params.contains("page"));
        assert_eq!(params.get("page"), None);
        assert!(!params.contains("other"));
        assert_eq!(params.len(), 2);
    }
}
