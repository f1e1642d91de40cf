//! Tests for bucketed work queue ordering

#[cfg(test)]
mod tests {
    use edgebleed::algorithm::queue::{BucketQueue, WorkItem};

    fn batch() -> Vec<WorkItem> {
        vec![
            WorkItem::new(0, 0, 1),
            WorkItem::new(1, 0, 3),
            WorkItem::new(2, 0, 1),
            WorkItem::new(3, 0, 3),
        ]
    }

    // Tests highest priority pops first with the latest insertion winning ties
    // Verified by popping from the front of the ordered buffer
    #[test]
    fn test_pop_highest_order() {
        let mut queue = BucketQueue::try_with_capacity(4, 8).unwrap();
        let mut items = batch();
        queue.refill(&mut items);

        let popped: Vec<_> = std::iter::from_fn(|| queue.pop_highest())
            .map(|item| item.x)
            .collect();
        assert_eq!(popped, vec![3, 1, 2, 0]);
        assert!(queue.is_empty());
    }

    // Tests ascending iteration keeps insertion order within a bucket
    // Verified by making the counting sort unstable
    #[test]
    fn test_iter_ascending_is_stable() {
        let mut queue = BucketQueue::try_with_capacity(4, 8).unwrap();
        let mut items = batch();
        queue.refill(&mut items);

        let order: Vec<_> = queue.iter_ascending().map(|item| item.x).collect();
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    // Tests refilling drains the input and replaces previous contents
    #[test]
    fn test_refill_replaces_contents() {
        let mut queue = BucketQueue::try_with_capacity(4, 8).unwrap();
        let mut items = batch();
        queue.refill(&mut items);
        assert!(items.is_empty());
        assert_eq!(queue.len(), 4);

        let mut next = vec![WorkItem::new(7, 7, 2)];
        queue.refill(&mut next);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_highest(), Some(WorkItem::new(7, 7, 2)));
    }

    // Tests priorities above the bucket range land in the top bucket
    #[test]
    fn test_priority_above_range_is_clamped() {
        let mut queue = BucketQueue::try_with_capacity(2, 2).unwrap();
        let mut items = vec![WorkItem::new(0, 0, 9), WorkItem::new(1, 0, 1)];
        queue.refill(&mut items);

        assert_eq!(queue.max_priority(), 2);
        assert_eq!(queue.pop_highest().map(|item| item.x), Some(0));
        assert_eq!(queue.pop_highest().map(|item| item.x), Some(1));
        assert_eq!(queue.pop_highest(), None);
    }

    // Tests an empty batch
    #[test]
    fn test_empty_refill() {
        let mut queue = BucketQueue::try_with_capacity(0, 8).unwrap();
        let mut items = Vec::new();
        queue.refill(&mut items);
        assert!(queue.is_empty());
        assert_eq!(queue.iter_ascending().count(), 0);
    }
}
