//! Tests for the bounded binary min-heap

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use ucsgrid::SearchError;
    use ucsgrid::algorithm::heap::PriorityQueue;

    fn assert_heap_property<P>(queue: &PriorityQueue<P>)
    where
        P: Copy + Ord + num_traits::Zero + std::fmt::Display,
    {
        for child in 2..=queue.size() {
            assert_ne!(
                queue.compare(child / 2, child),
                Some(Ordering::Greater),
                "parent of position {child} has a larger priority"
            );
        }
    }

    // Tests a new queue is empty and extraction fails cleanly
    // Verified by seeding the queue with a sentinel entry
    #[test]
    fn test_new_queue_is_empty() {
        let mut queue = PriorityQueue::<u32>::new(4);
        assert_eq!(queue.size(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 4);
        assert!(queue.peek_min().is_none());
        assert!(queue.dequeue_min().is_none());
    }

    // Tests a default queue reports size 0 and accepts nothing
    // Verified by giving the default queue a non-zero capacity
    #[test]
    fn test_default_queue() {
        let mut queue = PriorityQueue::<i64>::default();
        assert_eq!(queue.size(), 0);
        assert!(matches!(
            queue.enqueue(1, 1),
            Err(SearchError::QueueFull { capacity: 0 })
        ));
    }

    // Tests extracted priorities come out in non-decreasing order
    // Verified by choosing the larger child during sift-down
    #[test]
    fn test_extraction_order() {
        let priorities = [9_u32, 3, 7, 3, 0, 12, 5, 1, 8, 2, 2, 11];
        let mut queue = PriorityQueue::new(priorities.len());
        for (payload, &priority) in priorities.iter().enumerate() {
            queue.enqueue(payload, priority).unwrap();
        }

        let mut extracted = Vec::new();
        while let Some(entry) = queue.dequeue_min() {
            extracted.push(entry.priority);
        }

        let mut expected = priorities.to_vec();
        expected.sort_unstable();
        assert_eq!(extracted, expected);
    }

    // Tests the heap property holds after interleaved operations
    // Verified by skipping sift-up on enqueue
    #[test]
    fn test_heap_property_after_mixed_operations() {
        let mut queue = PriorityQueue::new(64);
        for round in 0..8_u32 {
            for offset in 0..6_u32 {
                let priority = (round * 37 + offset * 11) % 23;
                queue.enqueue((round * 6 + offset) as usize, priority).unwrap();
                assert_heap_property(&queue);
            }
            for _ in 0..3 {
                queue.dequeue_min().unwrap();
                assert_heap_property(&queue);
            }
        }
        assert_eq!(queue.size(), 8 * 6 - 8 * 3);
    }

    // Tests a full queue rejects entries without changing size
    // Verified by removing the capacity check
    #[test]
    fn test_capacity_respected() {
        let mut queue = PriorityQueue::new(2);
        queue.enqueue(1, 5_u32).unwrap();
        queue.enqueue(2, 4).unwrap();

        let result = queue.enqueue(3, 1);
        assert!(matches!(result, Err(SearchError::QueueFull { capacity: 2 })));
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.peek_min().unwrap().payload, 2);
    }

    // Tests negative priorities are rejected without changing size
    // Verified by removing the negative priority check
    #[test]
    fn test_negative_priority_rejected() {
        let mut queue = PriorityQueue::<i32>::new(4);
        let result = queue.enqueue(7, -1);

        assert!(matches!(result, Err(SearchError::InvalidPriority { .. })));
        assert_eq!(queue.size(), 0);
        assert!(queue.enqueue(7, 0).is_ok());
    }

    // Tests size after N enqueues and M dequeues is N - M
    // Verified by not decrementing size on dequeue
    #[test]
    fn test_size_round_trip() {
        let mut queue = PriorityQueue::new(16);
        for payload in 0..10 {
            queue.enqueue(payload, (payload * 3 % 7) as u32).unwrap();
        }
        for _ in 0..4 {
            queue.dequeue_min().unwrap();
        }
        assert_eq!(queue.size(), 6);
        assert_eq!(queue.len(), 6);
    }

    // Tests a later equal-priority entry does not displace the root
    // Verified by sifting up on equal priority
    #[test]
    fn test_equal_priority_does_not_displace() {
        let mut queue = PriorityQueue::new(4);
        queue.enqueue(10, 3_u32).unwrap();
        queue.enqueue(11, 3).unwrap();

        assert_eq!(queue.peek_min().unwrap().payload, 10);
        assert_eq!(queue.compare(1, 2), Some(Ordering::Equal));
    }

    // Tests peeking leaves the queue untouched
    // Verified by making peek remove the root
    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = PriorityQueue::new(4);
        queue.enqueue(1, 8_u32).unwrap();
        queue.enqueue(2, 2).unwrap();

        let peeked = queue.peek_min().unwrap();
        assert_eq!(peeked.payload, 2);
        assert_eq!(peeked.priority, 2);
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.dequeue_min(), Some(peeked));
    }

    // Tests compare uses 1-based positions and rejects positions out of range
    // Verified by treating positions as 0-based
    #[test]
    fn test_compare_positions() {
        let mut queue = PriorityQueue::new(4);
        queue.enqueue(1, 1_u32).unwrap();
        queue.enqueue(2, 6).unwrap();

        assert_eq!(queue.compare(1, 2), Some(Ordering::Less));
        assert_eq!(queue.compare(2, 1), Some(Ordering::Greater));
        assert_eq!(queue.compare(0, 1), None);
        assert_eq!(queue.compare(1, 3), None);
    }

    // Tests the single remaining entry can be extracted
    // Verified by sifting down into the removed slot
    #[test]
    fn test_dequeue_last_entry() {
        let mut queue = PriorityQueue::new(1);
        queue.enqueue(42, 0_u32).unwrap();

        let entry = queue.dequeue_min().unwrap();
        assert_eq!(entry.payload, 42);
        assert!(queue.is_empty());
        assert!(queue.entries().is_empty());
    }

    // Tests ties between children resolve toward the left child
    // Verified by preferring the right child when priorities are equal
    #[test]
    fn test_sift_down_prefers_left_on_tie() {
        let mut queue = PriorityQueue::new(8);
        queue.enqueue(0, 1_u32).unwrap();
        queue.enqueue(1, 5).unwrap();
        queue.enqueue(2, 5).unwrap();
        queue.enqueue(3, 9).unwrap();

        assert_eq!(queue.dequeue_min().unwrap().payload, 0);
        assert_eq!(queue.peek_min().unwrap().payload, 1);
        assert_heap_property(&queue);
    }

    // Tests an unbounded capacity is accepted and storage grows on demand
    // Verified by reserving the full capacity at construction
    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut queue = PriorityQueue::<u32>::new(usize::MAX);
        assert_eq!(queue.capacity(), usize::MAX);
        assert!(queue.is_empty());

        for payload in 0..5000 {
            queue.enqueue(payload, (payload % 13) as u32).unwrap();
        }
        assert_eq!(queue.size(), 5000);
        assert_eq!(queue.dequeue_min().unwrap().priority, 0);
        assert_eq!(queue.capacity(), usize::MAX);
    }
}
