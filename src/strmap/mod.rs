use std::cmp::Ordering;

/// Sorted string-keyed map. Lookups are a binary search over the keys.
#[derive(Debug)]
pub struct StrMap<T> {
    keys: Vec<Box<str>>,
    values: Vec<T>,
}

impl<T> Default for StrMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        let i = self.find_index(key).ok()?;
        self.values.get(i)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find_index(key).is_ok()
    }

    /// Inserts `value` under `key` unless the key is taken, in which case the
    /// value is handed back.
    pub fn try_insert(&mut self, key: &str, value: T) -> Result<(), T> {
        match self.find_index(key) {
            Ok(_) => Err(value),
            Err(i) => {
                self.keys.insert(i, key.into());
                self.values.insert(i, value);
                Ok(())
            }
        }
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        let mut l: usize = 0;
        let mut r: usize = self.keys.len();

        while l < r {
            let mid = l + (r - l) / 2;
            match (*self.keys[mid]).cmp(key) {
                Ordering::Less => l = mid + 1,
                Ordering::Equal => return Ok(mid),
                Ordering::Greater => r = mid,
            }
        }
        Err(l)
    }
}

#[cfg(test)]
mod tests {
    use super::StrMap;

    #[test]
    fn keeps_keys_sorted() {
        let mut map: StrMap<usize> = StrMap::new();
        for (i, key) in ["/b", "/a", "/c/:id", "", "/a/b"].iter().enumerate() {
            assert!(map.try_insert(key, i).is_ok());
        }

        let keys: Vec<&str> = map.keys.iter().map(|k| &**k).collect();
        assert_eq!(keys, ["", "/a", "/a/b", "/b", "/c/:id"]);
        assert_eq!(map.find("/c/:id"), Some(&2));
        assert_eq!(map.find(""), Some(&3));
        assert_eq!(map.find("/c"), None);
        assert_eq!(map.values.len(), 5);
    }

    #[test]
    fn rejects_taken_key() {
        let mut map: StrMap<usize> = StrMap::new();
        assert!(map.try_insert("/a", 1).is_ok());
        assert_eq!(map.try_insert("/a", 2), Err(2));
        assert_eq!(map.find("/a"), Some(&1));
        assert!(map.contains("/a"));
    }
}
