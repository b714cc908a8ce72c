use lazy_chunks::prelude::*;
use lazy_chunks::{ChunkSize, Error, Grouping, Groups};
use rand::random;

#[test]
fn test_collect_groups() {
    let groups = (1..=7).collect_groups(3).unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups.chunk_size().get(), 3);
    assert_eq!(
        groups.into_inner(),
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]
    );
    let groups = (1..=6).collect_groups(3).unwrap();
    assert_eq!(groups.into_inner(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn test_collect_groups_of_nothing() {
    let groups = std::iter::empty::<char>().collect_groups(5).unwrap();
    assert!(groups.is_empty());
    assert_eq!(groups.into_iter().count(), 0);
}

#[test]
fn test_collect_groups_rejects_invalid_sizes() {
    assert_eq!(
        (0..3).collect_groups(0).err(),
        Some(Error::InvalidChunkSize(0))
    );
    assert_eq!(
        (0..3).collect_groups(-7i64).err(),
        Some(Error::InvalidChunkSize(-7))
    );
}

#[test]
fn test_merging_groupings_fails() {
    let left = (0..5).collect_groups(2).unwrap();
    let right = (5..9).collect_groups(2).unwrap();
    assert_eq!(left.merge(right), Err(Error::UnsupportedMerge));

    let grouping = Grouping::new(ChunkSize::new(2).unwrap());
    let left = (0..3).fold_with(&grouping);
    let right = (3..4).fold_with(&grouping);
    assert_eq!(grouping.reduce(left, right), Err(Error::UnsupportedMerge));
}

#[test]
fn test_groups_by_reference() {
    let groups: Groups<&str> = vec!["a", "b", "c"].into_iter().collect_groups(2).unwrap();
    let sizes: Vec<usize> = (&groups).into_iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 1]);
    let firsts: Vec<&str> = groups.iter().map(|group| group[0]).collect();
    assert_eq!(firsts, vec!["a", "c"]);
}

#[test]
fn test_random_groups_have_full_capacity() {
    for _ in 0..100 {
        let len = random::<usize>() % 500;
        let size = 1 + random::<usize>() % 30;
        let groups = (0..len).collect_groups(size).unwrap().into_inner();
        assert_eq!(groups.len(), (len + size - 1) / size);
        if let Some((_, full)) = groups.split_last() {
            assert!(full.iter().all(|group| group.len() == size));
        }
        assert_eq!(groups.concat(), (0..len).collect::<Vec<_>>());
    }
}
