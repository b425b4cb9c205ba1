//! Route parsing and formatting
//!
//! A route is the term slug plus the chain of folder ids descended into from the
//! term root, mirroring `/materials/{term}/{...subPath}`.

use std::fmt;

const ROUTE_PREFIX: &str = "materials";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub term: String,
    pub sub_path: Vec<String>,
}

impl Route {
    /// Route to a term root
    pub fn term(slug: &str) -> Self {
        Self {
            term: slug.to_string(),
            sub_path: Vec::new(),
        }
    }

    /// Parse "/materials/term-1/a/b", "materials/term-1/a" or "term-1/a"
    ///
    /// Empty segments are dropped. Returns `None` when no term segment is left.
    ///
    /// ```
    /// use materials_tui::logic::path::Route;
    ///
    /// let route = Route::parse("/materials/term-3/abc/def").unwrap();
    /// assert_eq!(route.term, "term-3");
    /// assert_eq!(route.sub_path, vec!["abc", "def"]);
    ///
    /// assert_eq!(Route::parse("term-1"), Some(Route::term("term-1")));
    /// assert_eq!(Route::parse("/materials/"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let mut segments = input.split('/').filter(|s| !s.is_empty()).peekable();

        if segments.peek() == Some(&ROUTE_PREFIX) {
            segments.next();
        }

        let term = segments.next()?.to_string();
        let sub_path = segments.map(str::to_string).collect();

        Some(Self { term, sub_path })
    }

    /// Route one level deeper, into `folder_id`
    pub fn child(&self, folder_id: &str) -> Self {
        let mut sub_path = self.sub_path.clone();
        sub_path.push(folder_id.to_string());
        Self {
            term: self.term.clone(),
            sub_path,
        }
    }

    /// Route one level up; `None` at the term root
    pub fn parent(&self) -> Option<Self> {
        if self.sub_path.is_empty() {
            return None;
        }
        let mut sub_path = self.sub_path.clone();
        sub_path.pop();
        Some(Self {
            term: self.term.clone(),
            sub_path,
        })
    }

    /// Route covering the first `depth` segments (0 = term root)
    pub fn truncated(&self, depth: usize) -> Self {
        Self {
            term: self.term.clone(),
            sub_path: self.sub_path.iter().take(depth).cloned().collect(),
        }
    }

    pub fn depth(&self) -> usize {
        self.sub_path.len()
    }

    /// Folder this route points at, given the term's root folder id
    pub fn current_folder_id<'a>(&'a self, root_id: &'a str) -> &'a str {
        self.sub_path.last().map(String::as_str).unwrap_or(root_id)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", ROUTE_PREFIX, self.term)?;
        for segment in &self.sub_path {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        let expected = Route {
            term: "term-2".to_string(),
            sub_path: vec!["x".to_string()],
        };
        assert_eq!(Route::parse("/materials/term-2/x"), Some(expected.clone()));
        assert_eq!(Route::parse("materials/term-2/x/"), Some(expected.clone()));
        assert_eq!(Route::parse("term-2//x"), Some(expected));
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn test_display_round_trip() {
        let route = Route::term("term-5").child("a").child("b");
        assert_eq!(route.to_string(), "/materials/term-5/a/b");
        assert_eq!(Route::parse(&route.to_string()), Some(route));
    }

    #[test]
    fn test_parent_and_truncated() {
        let route = Route::term("term-1").child("a").child("b");
        assert_eq!(route.parent(), Some(Route::term("term-1").child("a")));
        assert_eq!(Route::term("term-1").parent(), None);
        assert_eq!(route.truncated(0), Route::term("term-1"));
        assert_eq!(route.truncated(1), Route::term("term-1").child("a"));
        assert_eq!(route.truncated(9), route);
    }

    #[test]
    fn test_current_folder_id() {
        assert_eq!(Route::term("term-1").current_folder_id("root"), "root");
        assert_eq!(
            Route::term("term-1").child("a").current_folder_id("root"),
            "a"
        );
    }
}
