//! Defines [`FileList`], the in-memory collection of posts. Each entry pairs a
//! post's [`Metadata`] with its content (the source file less its front
//! matter). The list is filled during the directory scan, sorted once by
//! date, and then traversed read-only with [`FileList::iter`].

use crate::metadata::Metadata;
use std::cmp::Ordering;
use std::iter::FusedIterator;

/// A single post: its metadata and its content bytes. The content is opaque
/// here; it is interpreted later by the markdown renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub metadata: Metadata,
    pub content: Vec<u8>,
}

/// An append-only, sortable list of [`Entry`] values.
#[derive(Clone, Debug, Default)]
pub struct FileList {
    entries: Vec<Entry>,
}

impl FileList {
    pub fn new() -> FileList {
        FileList::default()
    }

    /// Adds a file to the end of the list.
    pub fn append(&mut self, metadata: Metadata, content: Vec<u8>) {
        self.entries.push(Entry { metadata, content });
    }

    /// The number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Entry> {
        self.entries.get(i)
    }

    fn index(&self, i: isize) -> Option<usize> {
        if i < 0 || i as usize >= self.entries.len() {
            None
        } else {
            Some(i as usize)
        }
    }

    /// Returns whether the entry at `x` is dated strictly before the entry at
    /// `y`. Returns false if either index is out of range.
    pub fn less(&self, x: isize, y: isize) -> bool {
        match (self.index(x), self.index(y)) {
            (Some(x), Some(y)) => {
                by_date(&self.entries[x].metadata, &self.entries[y].metadata)
                    == Ordering::Less
            }
            _ => false,
        }
    }

    /// Exchanges the entries at `x` and `y`. Does nothing if either index is
    /// out of range or if `x == y`.
    pub fn swap(&mut self, x: isize, y: isize) {
        if let (Some(x), Some(y)) = (self.index(x), self.index(y)) {
            if x != y {
                self.entries.swap(x, y);
            }
        }
    }

    /// Sorts the list by date, earliest first, using the same ordering as
    /// [`FileList::less`]. The sort is stable: entries with equal dates stay
    /// in the order they were appended.
    pub fn sort_by_date(&mut self) {
        self.entries.sort_by(|a, b| by_date(&a.metadata, &b.metadata));
    }

    /// Returns an iterator over the `(metadata, content)` pairs in the current
    /// list order. Each call starts again from the first entry.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: &self.entries,
            position: 0,
        }
    }
}

// Orders metadata by the instant of its date. Offsets don't matter.
fn by_date(a: &Metadata, b: &Metadata) -> Ordering {
    if a.date.before(&b.date) {
        Ordering::Less
    } else if b.date.before(&a.date) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = (&'a Metadata, &'a [u8]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// A forward-only cursor over a [`FileList`]. See [`FileList::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    entries: &'a [Entry],
    position: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Metadata, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.position)?;
        self.position += 1;
        Some((&entry.metadata, &entry.content))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::time::Timestamp;

    fn metadata(title: &str, date: &str, tag: &str) -> Metadata {
        Metadata {
            title: title.to_owned(),
            date: Timestamp::decode(date).unwrap(),
            tags: vec![tag.to_owned()],
        }
    }

    // Appended latest first so sorting has work to do.
    fn two_posts() -> FileList {
        let mut list = FileList::new();
        list.append(
            metadata("Gopher got a lady", "29 May 12 12:00 -0300", "gopher"),
            b"there!".to_vec(),
        );
        list.append(
            metadata("Python get's old", "28 May 12 23:56 -0300", "python"),
            b"hi".to_vec(),
        );
        list
    }

    fn titles(list: &FileList) -> Vec<&str> {
        list.iter().map(|(m, _)| m.title.as_str()).collect()
    }

    #[test]
    fn test_append_increases_length() {
        let mut list = FileList::new();
        assert!(list.is_empty());
        list.append(Metadata::default(), b"hi".to_vec());
        assert_eq!(1, list.len());
    }

    #[test]
    fn test_less() {
        let list = two_posts();
        assert!(list.less(1, 0));
        assert!(!list.less(0, 1));
        assert!(!list.less(0, 0));
    }

    #[test]
    fn test_less_out_of_range() {
        let list = FileList::new();
        assert!(!list.less(1, 1));
        assert!(!list.less(-1, 0));

        let list = two_posts();
        assert!(!list.less(1, 2));
        assert!(!list.less(-1, 0));
    }

    #[test]
    fn test_swap_out_of_range_is_a_no_op() {
        let mut list = FileList::new();
        list.swap(1, 2);
        list.swap(-1, 0);
        assert_eq!(0, list.len());

        let mut list = two_posts();
        list.swap(0, 2);
        list.swap(-1, 1);
        assert_eq!(
            vec!["Gopher got a lady", "Python get's old"],
            titles(&list)
        );
    }

    #[test]
    fn test_swap_same_index() {
        let mut list = two_posts();
        for i in 0..2 {
            list.swap(i, i);
        }
        assert_eq!(
            vec!["Gopher got a lady", "Python get's old"],
            titles(&list)
        );
    }

    #[test]
    fn test_swap_moves_metadata_and_content_together() {
        let mut list = two_posts();
        list.swap(0, 1);
        let pairs: Vec<(&str, &[u8])> =
            list.iter().map(|(m, c)| (m.title.as_str(), c)).collect();
        assert_eq!(
            vec![
                ("Python get's old", &b"hi"[..]),
                ("Gopher got a lady", &b"there!"[..]),
            ],
            pairs
        );
    }

    #[test]
    fn test_sort_by_date() {
        let mut list = two_posts();
        list.sort_by_date();
        assert_eq!(
            vec!["Python get's old", "Gopher got a lady"],
            titles(&list)
        );
    }

    #[test]
    fn test_sort_compares_instants_across_offsets() {
        let mut list = FileList::new();
        // 02:00 UTC
        list.append(metadata("b", "28 May 12 02:00 +0000", "x"), Vec::new());
        // 01:00 UTC
        list.append(metadata("a", "27 May 12 22:00 -0300", "x"), Vec::new());
        list.sort_by_date();
        assert_eq!(vec!["a", "b"], titles(&list));
    }

    #[test]
    fn test_sort_keeps_order_for_same_instant_at_other_offsets() {
        let mut list = FileList::new();
        list.append(metadata("west", "28 May 12 02:00 -0300", "x"), Vec::new());
        list.append(metadata("utc", "28 May 12 05:00 +0000", "x"), Vec::new());
        assert!(!list.less(0, 1));
        assert!(!list.less(1, 0));
        list.sort_by_date();
        assert_eq!(vec!["west", "utc"], titles(&list));
    }

    #[test]
    fn test_sorted_list_agrees_with_less() {
        let mut list = two_posts();
        let m = metadata("Newest", "01 Jun 12 08:00 -0300", "new");
        list.append(m, Vec::new());
        list.sort_by_date();
        for i in 0..list.len() as isize - 1 {
            assert!(!list.less(i + 1, i));
        }
        assert!(list.less(0, 2));
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut list = FileList::new();
        for title in &["first", "second", "third"] {
            let m = metadata(title, "01 Jan 12 00:00 +0000", "x");
            list.append(m, Vec::new());
        }
        let m = metadata("earliest", "31 Dec 11 00:00 +0000", "x");
        list.append(m, Vec::new());
        list.sort_by_date();
        assert_eq!(vec!["earliest", "first", "second", "third"], titles(&list));
    }

    #[test]
    fn test_iter_yields_every_entry_each_time() {
        let mut list = two_posts();
        let m = metadata("Newest", "01 Jun 12 08:00 -0300", "new");
        list.append(m, b"new".to_vec());
        list.sort_by_date();

        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(3, first.len());
        assert_eq!(first, second);
        assert_eq!(3, list.iter().len());
        assert!(first.windows(2).all(|w| !w[1].0.date.before(&w[0].0.date)));
    }

    #[test]
    fn test_iter_is_fused() {
        let list = two_posts();
        let mut iter = list.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(0, iter.len());
    }

    #[test]
    fn test_iter_empty() {
        assert_eq!(0, FileList::new().iter().count());
    }
}
