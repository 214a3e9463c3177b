use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::utils::error::{ItemSetError, Result};

/// An ordered sequence of textual item labels, kept in whatever frequency
/// order the producing pipeline stage assigned. The first label is the head,
/// the rest the tail.
///
/// The type plays two roles: an ordered record key (equality, hashing and
/// ordering are all sequence-based) and an unordered label set (only
/// [`subsumes`](ItemSet::subsumes) takes that view). It is a plain value with
/// no interior mutability; sharing one instance across threads while calling
/// `sort` or `extract_head` needs external synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemSet {
    items: Vec<String>,
}

impl ItemSet {
    /// An empty item set.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build an item set from labels in the given order. Duplicates are kept.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Prepend `head` to the labels of `tail`, producing a new item set.
    /// The tail is copied, not mutated.
    pub fn with_head(head: impl Into<String>, tail: &ItemSet) -> Self {
        let mut items = Vec::with_capacity(tail.items.len() + 1);
        items.push(head.into());
        items.extend(tail.items.iter().cloned());
        Self { items }
    }

    /// The labels in their current order. Empty slice for the empty set.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The labels as raw bytes, in order, as they appear on the wire.
    pub fn raw_items(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.items.iter().map(|item| item.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the labels in order. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Sort the labels in place in natural (code point) order. Idempotent.
    pub fn sort(&mut self) {
        self.items.sort();
    }

    /// Remove and return the first label: for `{a b c}` this returns `"a"`
    /// and leaves the set as `{b c}`. Fails on an empty set.
    pub fn extract_head(&mut self) -> Result<String> {
        if self.items.is_empty() {
            return Err(ItemSetError::EmptyItemSet);
        }
        Ok(self.items.remove(0))
    }

    /// True iff every distinct label of `other` also appears in this set.
    /// Order and duplicates are ignored; this is the one operation that treats
    /// an item set as an unordered set.
    // TODO exploit the frequency ordering instead of hashing every label.
    pub fn subsumes(&self, other: &ItemSet) -> bool {
        let ours: HashSet<&str> = self.items.iter().map(String::as_str).collect();
        other.items.iter().all(|item| ours.contains(item.as_str()))
    }

    /// Bytes of the space-joined rendering, without allocating it.
    fn rendered_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let mut first = true;
        self.items.iter().flat_map(move |item| {
            let sep = if first { None } else { Some(b' ') };
            first = false;
            sep.into_iter().chain(item.bytes())
        })
    }
}

/// Labels joined by a single space. Labels containing spaces are not escaped,
/// so the rendering is not guaranteed reversible.
impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items.join(" "))
    }
}

/// Lexicographic order over the space-joined rendering, matching a plain
/// string comparison of `to_string()` values.
///
/// Known limitation: labels containing spaces can make two unequal sets render
/// identically, in which case `cmp` returns `Equal` while `==` is false. The
/// pipeline sort order depends on the rendered form, so this is kept as is.
impl Ord for ItemSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered_bytes().cmp(other.rendered_bytes())
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Into<String>> FromIterator<S> for ItemSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

/// Read-only forward iterator over an item set's labels.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
