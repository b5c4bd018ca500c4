//! `owner/name` repository identifier parsing.

/// Repository identifier split into owner and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoWithOwner<'a> {
    /// Text before the first `/` (the whole input when there is none).
    pub owner: &'a str,
    /// Text between the first and second `/`, absent when the input has no `/`.
    pub name: Option<&'a str>,
}

/// Splits `repo_with_owner` on `/` into owner and name.
///
/// The input is not validated: segments after the second `/` are discarded and a missing `/`
/// leaves `name` unset.
pub fn parse_repo_with_owner(repo_with_owner: &str) -> RepoWithOwner<'_> {
    let mut segments = repo_with_owner.split('/');
    RepoWithOwner {
        owner: segments.next().unwrap_or_default(),
        name: segments.next(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_owner_and_name() {
        assert_eq!(
            parse_repo_with_owner("octo/repo"),
            RepoWithOwner {
                owner: "octo",
                name: Some("repo"),
            }
        );
    }

    #[test]
    fn extra_segments_are_discarded() {
        assert_eq!(
            parse_repo_with_owner("octo/repo/tree/main"),
            RepoWithOwner {
                owner: "octo",
                name: Some("repo"),
            }
        );
    }

    #[test]
    fn missing_separator_leaves_name_unset() {
        assert_eq!(
            parse_repo_with_owner("octo"),
            RepoWithOwner {
                owner: "octo",
                name: None,
            }
        );
    }

    #[test]
    fn empty_segments_are_kept_as_empty_strings() {
        assert_eq!(
            parse_repo_with_owner("/repo"),
            RepoWithOwner {
                owner: "",
                name: Some("repo"),
            }
        );
        assert_eq!(
            parse_repo_with_owner("octo/"),
            RepoWithOwner {
                owner: "octo",
                name: Some(""),
            }
        );
        assert_eq!(
            parse_repo_with_owner(""),
            RepoWithOwner {
                owner: "",
                name: None,
            }
        );
    }
}
