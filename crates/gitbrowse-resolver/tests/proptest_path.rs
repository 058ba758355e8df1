//! Property tests for repository paths

use gitbrowse_resolver::RepoPath;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._ -]{1,12}"
}

proptest! {
    #[test]
    fn display_then_parse_is_identity(segments in prop::collection::vec(segment(), 1..6)) {
        let path = RepoPath::new(segments.clone()).unwrap();
        let reparsed = RepoPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed.segments(), segments.as_slice());
    }

    #[test]
    fn leading_slash_is_ignored(segments in prop::collection::vec(segment(), 0..6)) {
        let joined = segments.join("/");
        let with_slash = format!("/{}", joined);
        prop_assert_eq!(RepoPath::parse(&joined).unwrap(), RepoPath::parse(&with_slash).unwrap());
    }

    #[test]
    fn doubled_separator_is_rejected(a in segment(), b in segment()) {
        let text = format!("{}//{}", a, b);
        prop_assert!(RepoPath::parse(&text).is_err());
    }
}
