//! Helpers for building throwaway git repositories with git2
#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature};
use std::path::Path;

pub fn init_repo(dir: &Path) -> Repository {
    Repository::init(dir).expect("Failed to init repository")
}

fn signature() -> Signature<'static> {
    Signature::now("Flux Tester", "tester@example.com").expect("Failed to create signature")
}

/// Commit the (empty) index on top of HEAD
pub fn commit(repo: &Repository, message: &str) -> Oid {
    let sig = signature();
    let tree_id = repo
        .index()
        .and_then(|mut index| index.write_tree())
        .expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let parents: Vec<Commit<'_>> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().expect("HEAD is not a commit")],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Failed to commit")
}

/// Create `branch` at HEAD and check it out
pub fn checkout_new_branch(repo: &Repository, branch: &str) {
    let head = repo
        .head()
        .and_then(|h| h.peel_to_commit())
        .expect("HEAD is not a commit");
    repo.branch(branch, &head, false).expect("Failed to create branch");
    repo.set_head(&format!("refs/heads/{}", branch))
        .expect("Failed to set HEAD");
}

pub fn lightweight_tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Failed to find object");
    repo.tag_lightweight(name, &object, false)
        .expect("Failed to create tag");
}

pub fn annotated_tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Failed to find object");
    repo.tag(name, &object, &signature(), "release", false)
        .expect("Failed to create annotated tag");
}
