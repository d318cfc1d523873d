// Cross-checks precedence against the semver crate on build-free versions,
// where both orderings are required to agree.
use git_flux::domain::SemVer;
use std::cmp::Ordering;

const VERSIONS: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-0",
    "1.0.0-0.0",
    "1.0.0-1",
    "1.0.0-2",
    "1.0.0-10",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-alpha-1",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0-RC.1",
    "1.0.0",
    "1.0.1",
    "1.2.0-topic-x",
    "1.10.0",
    "2.0.0-alpha.0",
    "10.0.0",
];

#[test]
fn test_precedence_agrees_with_semver_crate() {
    for a in VERSIONS {
        for b in VERSIONS {
            let ours = SemVer::parse(a).unwrap().cmp(&SemVer::parse(b).unwrap());
            let theirs = semver::Version::parse(a)
                .unwrap()
                .cmp(&semver::Version::parse(b).unwrap());
            assert_eq!(ours, theirs, "comparing {} with {}", a, b);
        }
    }
}

#[test]
fn test_render_matches_semver_crate() {
    for s in VERSIONS {
        let ours = SemVer::parse(s).unwrap();
        let theirs = semver::Version::parse(s).unwrap();
        assert_eq!(ours.to_string(), theirs.to_string());
        assert_eq!((ours.major, ours.minor, ours.patch), (theirs.major, theirs.minor, theirs.patch));
    }
}

#[test]
fn test_build_metadata_orders_after_precedence() {
    let plain = SemVer::parse("1.0.0").unwrap();
    let built = SemVer::parse("1.0.0+001").unwrap();
    let later = SemVer::parse("1.0.0+002").unwrap();
    assert_eq!(plain.cmp(&built), Ordering::Less);
    assert_eq!(built.cmp(&later), Ordering::Less);
    assert_eq!(built.cmp(&built.clone()), Ordering::Equal);
}
