use std::{
    cell::Cell,
    collections::VecDeque,
    mem,
    rc::Rc,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;

#[track_caller]
fn check<T, const B: usize>(deque: &BlockDeque<T, B>) {
    assert_eq!(deque.end() - deque.begin(), deque.len() as isize);
    assert_eq!(deque.begin() == deque.end(), deque.is_empty());
    for block in deque.head.block()..=deque.tail.block() {
        assert!(deque.map.is_allocated(block), "slot {block} of the live span has no block");
    }
    assert_eq!(deque.iter().len(), deque.len());
    assert_eq!(deque.iter().rev().count(), deque.len());
}

fn collect<T: Clone, const B: usize>(deque: &BlockDeque<T, B>) -> Vec<T> {
    deque.iter().cloned().collect()
}

/// Counts how many times values created from it have been dropped.
#[derive(Debug)]
struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn t_from_array_iterates_in_order() {
    let deque = BlockDeque::<i32>::from([1, 2, 3, 4, 5, 6, 7]);
    check(&deque);
    assert_eq!(deque.len(), 7);
    assert!(deque.iter().copied().eq(1..=7));
    assert!(deque.iter().rev().copied().eq((1..=7).rev()));
}

#[test]
fn t_insert_into_empty_and_at_end() {
    let mut deque = BlockDeque::<i32, 2>::new();
    let at = deque.insert(deque.begin(), -22);
    assert_eq!(deque[at], -22);
    assert_eq!(deque.front(), Some(&-22));
    assert_eq!(deque.back(), Some(&-22));
    assert_eq!(deque.len(), 1);
    check(&deque);

    let at = deque.insert(deque.end(), 20);
    assert_eq!(deque[at], 20);
    assert_eq!(deque.front(), Some(&-22));
    assert_eq!(deque.back(), Some(&20));
    assert_eq!(deque.len(), 2);
    check(&deque);
}

#[test]
fn t_fifo() {
    let mut deque = BlockDeque::<usize>::new();
    for i in 0..1000 {
        deque.push_back(i);
    }
    check(&deque);
    for i in 0..1000 {
        assert_eq!(deque.pop_front(), Some(i));
    }
    assert!(deque.is_empty());
    assert_eq!(deque.pop_front(), None);
    check(&deque);
}

#[test]
fn t_lifo() {
    let mut deque = BlockDeque::<usize, 3>::new();
    for i in 0..1000 {
        deque.push_front(i);
    }
    check(&deque);
    for i in (0..1000).rev() {
        assert_eq!(deque.pop_front(), Some(i));
    }
    for i in 0..500 {
        deque.push_back(i);
    }
    for i in (0..500).rev() {
        assert_eq!(deque.pop_back(), Some(i));
    }
    assert_eq!(deque.pop_back(), None);
    check(&deque);
}

#[test]
fn t_erase_empty_range() {
    let mut deque = BlockDeque::<i32>::from([1, 2, 3, 4, 5, 6, 7]);
    let first = deque.begin() + 3;
    let next = deque.erase_range(first, first);
    assert_eq!(next, deque.begin() + 3);
    assert_eq!(deque.len(), 7);
    assert_eq!(deque[next], 4);
}

#[test]
fn t_clear_keeps_middle_block() {
    let mut deque: BlockDeque<i32> = (0..20).collect();
    deque.clear();
    check(&deque);
    assert!(deque.is_empty());
    let allocated = deque.allocated_blocks();
    deque.push_back(3);
    assert_eq!(deque.allocated_blocks(), allocated);
    assert_eq!(deque, [3]);
    check(&deque);
}

#[test]
fn t_clear_after_shrink_reallocates_middle() {
    let mut deque: BlockDeque<i32, 2> = (0..20).collect();
    for _ in 0..19 {
        deque.pop_front();
    }
    assert!(deque.shrink_to_fit() > 0);
    let middle = deque.map_len() / 2;
    assert!(!deque.map.is_allocated(middle));
    deque.clear();
    assert!(deque.map.is_allocated(middle));
    check(&deque);
    deque.push_front(1);
    deque.push_back(2);
    assert_eq!(deque, [1, 2]);
    check(&deque);
}

#[test]
fn t_insert_shifts_nearer_side() {
    let mut deque: BlockDeque<i32, 4> = (0..100).collect();
    let (begin, end) = (deque.begin(), deque.end());

    deque.insert(deque.begin() + 2, -1);
    assert_eq!(deque.end(), end);
    assert_ne!(deque.begin(), begin);

    let begin = deque.begin();
    deque.insert(deque.end() - 2, -2);
    assert_eq!(deque.begin(), begin);

    assert_eq!(deque.len(), 102);
    assert_eq!(deque[2], -1);
    assert_eq!(deque[99], -2);
    assert_eq!(deque[100], 98);
    check(&deque);
}

#[test]
fn t_erase_shifts_nearer_side() {
    let mut deque: BlockDeque<i32, 4> = (0..100).collect();
    let end = deque.end();
    let next = deque.erase(deque.begin() + 1);
    assert_eq!(deque[next], 2);
    assert_eq!(deque.end(), end);

    let begin = deque.begin();
    let next = deque.erase(deque.end() - 1);
    assert_eq!(next, deque.end());
    assert_eq!(deque.begin(), begin);

    assert_eq!(deque.len(), 98);
    assert_eq!(deque.front(), Some(&0));
    assert_eq!(deque.back(), Some(&98));
    check(&deque);
}

#[test]
fn t_insert_n_across_blocks() {
    for pos in [0, 1, 4, 9, 10] {
        let mut deque: BlockDeque<i32, 5> = (0..10).collect();
        let at = deque.insert_n(deque.begin() + pos, 7, -1);
        assert_eq!(deque.position(at), Ok(pos));
        let mut expected: Vec<i32> = (0..10).collect();
        expected.splice(pos..pos, [-1; 7]).for_each(drop);
        assert_eq!(collect(&deque), expected, "inserting at {pos}");
        check(&deque);
    }

    let mut deque = BlockDeque::<i32, 7>::new();
    let at = deque.insert_n(deque.end(), 0, 5);
    assert_eq!(at, deque.end());
    assert!(deque.is_empty());
}

#[test]
fn t_insert_iter_in_order() {
    let mut deque: BlockDeque<char, 2> = "abef".chars().collect();
    let at = deque.insert_iter(deque.begin() + 2, ['c', 'd']);
    assert_eq!(deque[at], 'c');
    assert_eq!(deque, ['a', 'b', 'c', 'd', 'e', 'f']);

    let at = deque.insert_iter(deque.begin(), "xyz".chars().collect::<Vec<_>>());
    assert_eq!(at, deque.begin());
    assert_eq!(collect(&deque).into_iter().collect::<String>(), "xyzabcdef");
    check(&deque);
}

/// Reports a larger length than it actually yields.
struct ShortIter {
    left: usize,
    reported: usize,
}

impl Iterator for ShortIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        self.reported -= 1;
        Some(-1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.reported, Some(self.reported))
    }
}

impl ExactSizeIterator for ShortIter {}

#[test]
fn t_insert_iter_short_iterator_leaves_no_hole() {
    let mut deque: BlockDeque<i32, 3> = (0..10).collect();
    deque.insert_iter(deque.begin() + 7, ShortIter { left: 2, reported: 5 });
    assert_eq!(deque, [0, 1, 2, 3, 4, 5, 6, -1, -1, 7, 8, 9]);
    check(&deque);
}

#[test]
fn t_erase_range_variants() {
    for (start, end) in [(0, 3), (2, 5), (6, 10), (0, 10), (4, 4), (3, 8)] {
        let mut deque: BlockDeque<i32, 4> = (0..10).collect();
        let next = deque.erase_range(deque.begin() + start, deque.begin() + end);
        assert_eq!(deque.position(next), Ok(start));
        let mut expected: Vec<i32> = (0..10).collect();
        expected.drain(start..end);
        assert_eq!(collect(&deque), expected, "erasing {start}..{end}");
        check(&deque);
    }
}

#[test]
#[should_panic]
fn t_erase_end_panics() {
    let mut deque: BlockDeque<i32> = (0..3).collect();
    deque.erase(deque.end());
}

#[test]
#[should_panic]
fn t_insert_outside_panics() {
    let mut deque: BlockDeque<i32> = (0..3).collect();
    deque.insert(deque.end() + 1, 0);
}

#[test]
fn t_index_and_cursor_access() {
    let mut deque: BlockDeque<i32, 3> = (0..10).collect();
    deque[4] = 40;
    let cursor = deque.cursor(5);
    deque[cursor] = 50;
    assert_eq!(deque.get(4), Some(&40));
    assert_eq!(deque.get_at(cursor), Some(&50));
    assert_eq!(deque.get(10), None);
    assert_eq!(deque.get_at(deque.end()), None);
    assert_eq!(deque.position(deque.end()), Ok(10));
    assert_eq!(
        deque.position(deque.end() + 1),
        Err(DequeError::from(deque.end() + 1))
    );
    if let Some(x) = deque.get_at_mut(deque.begin()) {
        *x = -1;
    }
    assert_eq!(deque.front(), Some(&-1));
    assert!(deque.contains(&50));
    assert!(!deque.contains(&5));
}

#[test]
fn t_swap() {
    let mut deque: BlockDeque<i32, 2> = (0..5).collect();
    assert_eq!(deque.swap(0, 4), Ok(()));
    assert_eq!(deque.swap(2, 2), Ok(()));
    assert_eq!(deque, [4, 1, 2, 3, 0]);
    assert_eq!(
        deque.swap(1, 5),
        Err(DequeError::IndexOutOfBounds { index: 5, len: 5 })
    );
}

#[test]
fn t_try_insert_gives_value_back() {
    let mut deque: BlockDeque<String> = BlockDeque::new();
    assert!(deque.try_insert(0, "a".to_owned()).is_ok());
    let Err((value, err)) = deque.try_insert(2, "b".to_owned()) else {
        panic!("insert past the end should fail");
    };
    assert_eq!(value, "b");
    assert_eq!(err, DequeError::IndexOutOfBounds { index: 2, len: 1 });
    assert_eq!(deque.len(), 1);
}

#[test]
fn t_remove() {
    let mut deque: BlockDeque<i32, 3> = (0..10).collect();
    assert_eq!(deque.remove(3), Some(3));
    assert_eq!(deque.remove(8), Some(9));
    assert_eq!(deque.remove(8), None);
    assert_eq!(deque, [0, 1, 2, 4, 5, 6, 7, 8]);
    check(&deque);
}

#[test]
fn t_resize() {
    let mut deque: BlockDeque<i32, 4> = (0..5).collect();
    deque.resize(12, 7);
    assert_eq!(deque.len(), 12);
    assert!(deque.iter().skip(5).all(|&x| x == 7));
    check(&deque);

    let begin = deque.begin();
    deque.resize(2, 0);
    assert_eq!(deque, [0, 1]);
    assert_eq!(deque.begin(), begin);
    check(&deque);

    let mut next = 0;
    deque.resize_with(5, || {
        next += 1;
        next
    });
    assert_eq!(deque, [0, 1, 1, 2, 3]);
}

#[test]
fn t_shrink_to_fit_releases_spare_blocks() {
    let mut deque: BlockDeque<i32, 4> = (0..40).collect();
    for _ in 0..30 {
        deque.pop_front();
    }
    let before = deque.allocated_blocks();
    let (map_len, begin, end) = (deque.map_len(), deque.begin(), deque.end());
    let released = deque.shrink_to_fit();
    assert!(released > 0);
    assert_eq!(deque.allocated_blocks(), before - released);
    assert_eq!(
        deque.allocated_blocks(),
        deque.end().block() - deque.begin().block() + 1
    );
    assert_eq!((deque.map_len(), deque.begin(), deque.end()), (map_len, begin, end));
    assert!(deque.iter().copied().eq(30..40));
    assert_eq!(deque.shrink_to_fit(), 0);

    for i in (0..30).rev() {
        deque.push_front(i);
    }
    assert!(deque.iter().copied().eq(0..40));
    check(&deque);
}

#[test]
fn t_take_leaves_fresh_deque() {
    let mut deque: BlockDeque<i32, 4> = (0..100).collect();
    let taken = mem::take(&mut deque);
    assert_eq!(taken.len(), 100);
    assert!(deque.is_empty());
    assert_eq!(deque.allocated_blocks(), 1);
    assert_eq!(deque.map_len(), DEFAULT_MAP_SLOTS);
    check(&deque);
}

#[test]
fn t_with_capacity_avoids_growth() {
    let mut deque = BlockDeque::<u32, 8>::with_capacity(256);
    let map_len = deque.map_len();
    assert_eq!(deque.allocated_blocks(), 1);
    for i in 0..240 {
        deque.push_back(i);
        deque.push_front(i);
    }
    assert_eq!(deque.map_len(), map_len);
    check(&deque);
}

#[test]
fn t_push_growth_is_amortized() {
    const N: usize = 10_000;
    let mut deque = BlockDeque::<usize, 8>::new();
    let mut map_len = deque.map_len();
    let mut reallocations = 0;
    for i in 0..N {
        deque.push_back(i);
        if deque.map_len() != map_len {
            map_len = deque.map_len();
            reallocations += 1;
        }
    }
    assert!(deque.allocated_blocks() <= N / 8 + 2);
    assert!(reallocations <= 12, "{reallocations} map reallocations");
    check(&deque);
}

#[test]
fn t_queue_workload_recenters() {
    let mut deque = BlockDeque::<u64, 4>::new();
    for i in 0..100_000 {
        deque.push_back(i);
        deque.push_back(i);
        deque.push_back(i);
        assert_eq!(deque.pop_front(), Some(i));
        assert_eq!(deque.pop_front(), Some(i));
        assert_eq!(deque.pop_front(), Some(i));
    }
    assert!(deque.map_len() <= 16, "map grew to {} slots", deque.map_len());
    assert!(deque.allocated_blocks() <= deque.map_len());
    check(&deque);
}

#[test]
fn t_drain() {
    let mut deque: BlockDeque<i32, 3> = (0..10).collect();
    let drained: Vec<i32> = deque.drain(2..5).collect();
    assert_eq!(drained, [2, 3, 4]);
    assert_eq!(deque, [0, 1, 5, 6, 7, 8, 9]);
    check(&deque);

    let mut drain = deque.drain(4..);
    assert_eq!(drain.len(), 3);
    assert_eq!(drain.next_back(), Some(9));
    assert_eq!(drain.next(), Some(7));
    drop(drain);
    assert_eq!(deque, [0, 1, 5, 6]);
    check(&deque);

    assert_eq!(
        deque.try_drain(3..1).err(),
        Some(DequeError::Range(RangeError::StartAfterEnd { start: 3, end: 1 }))
    );
    assert_eq!(
        deque.try_drain(..9).err(),
        Some(DequeError::Range(RangeError::EndOutOfBounds { end: 9, len: 4 }))
    );
}

#[test]
fn t_drain_leak_keeps_prefix() {
    let mut deque: BlockDeque<i32, 3> = (0..10).collect();
    let mut drain = deque.drain(3..6);
    assert_eq!(drain.next(), Some(3));
    mem::forget(drain);
    assert_eq!(deque, [0, 1, 2]);
    check(&deque);
    deque.push_back(3);
    assert_eq!(deque, [0, 1, 2, 3]);
}

#[test]
fn t_drops_every_element_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut deque = BlockDeque::<DropCounter, 3>::new();
        for _ in 0..20 {
            deque.push_back(DropCounter::new(&drops));
            deque.push_front(DropCounter::new(&drops));
        }
        drop(deque.pop_back());
        drop(deque.remove(7));
        assert_eq!(drops.get(), 2);

        let first = deque.begin() + 5;
        deque.erase_range(first, first + 4);
        assert_eq!(drops.get(), 6);

        deque.drain(10..15).next();
        assert_eq!(drops.get(), 11);

        deque.truncate(20);
        assert_eq!(drops.get(), 20);
        deque.retain(|_| false);
        assert_eq!(drops.get(), 40);
        assert!(deque.is_empty());

        deque.push_back(DropCounter::new(&drops));
        deque.push_back(DropCounter::new(&drops));
    }
    assert_eq!(drops.get(), 42);
}

#[test]
fn t_retain() {
    let mut deque: BlockDeque<i32, 4> = (0..30).collect();
    deque.retain(|x| x % 3 == 0);
    assert!(deque.iter().copied().eq((0..30).step_by(3)));
    deque.retain_mut(|x| {
        *x += 1;
        *x > 10
    });
    assert_eq!(deque, [13, 16, 19, 22, 25, 28]);
    check(&deque);
}

#[test]
fn t_append_and_extend() {
    let mut a: BlockDeque<i32, 2> = (0..5).collect();
    let mut b: BlockDeque<i32, 2> = (5..9).collect();
    a.append(&mut b);
    assert!(b.is_empty());
    a.extend(&[9, 10]);
    assert!(a.iter().copied().eq(0..11));
    check(&a);
    check(&b);
}

#[test]
fn t_iterators() {
    let mut deque: BlockDeque<i32, 3> = (0..10).collect();
    for x in &mut deque {
        *x *= 2;
    }
    deque.iter_mut().rev().take(1).for_each(|x| *x = -1);
    let mut iter = deque.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&-1));
    assert_eq!(iter.len(), 8);
    assert!(iter.clone().copied().eq((1..9).map(|x| x * 2)));

    let mut into_iter = deque.clone().into_iter();
    assert_eq!(into_iter.next_back(), Some(-1));
    assert_eq!(into_iter.len(), 9);
    assert_eq!(into_iter.into_inner().len(), 9);

    let empty = BlockDeque::<i32, 3>::new();
    assert_eq!(empty.iter().next(), None);
    assert_eq!(empty.iter().next_back(), None);
}

#[test]
fn t_compare_and_hash() {
    use std::hash::{BuildHasher, RandomState};

    let a: BlockDeque<i32, 2> = (0..5).collect();
    let mut b: BlockDeque<i32, 2> = (1..5).collect();
    b.push_front(0);
    assert_eq!(a, b);
    assert_eq!(a, vec![0, 1, 2, 3, 4]);
    assert_eq!(a, &[0, 1, 2, 3, 4][..]);
    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));
    b.push_back(0);
    assert!(a < b);
    assert_eq!(format!("{a:?}"), "[0, 1, 2, 3, 4]");
    assert_eq!(a.clone(), a);
}

#[test]
fn t_zero_sized_elements() {
    let mut deque = BlockDeque::<(), 4>::new();
    for _ in 0..50 {
        deque.push_back(());
    }
    deque.insert(deque.begin() + 10, ());
    deque.erase(deque.begin() + 3);
    assert_eq!(deque.len(), 50);
    assert_eq!(deque.iter().count(), 50);
    check(&deque);
}

fn differential<const B: usize>(seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ours = BlockDeque::<u32, B>::new();
    let mut model = VecDeque::<u32>::new();

    for step in 0..4000u32 {
        let len = model.len();
        match rng.gen_range(0..11) {
            0 | 1 => {
                ours.push_back(step);
                model.push_back(step);
            }
            2 | 3 => {
                ours.push_front(step);
                model.push_front(step);
            }
            4 => assert_eq!(ours.pop_back(), model.pop_back()),
            5 => assert_eq!(ours.pop_front(), model.pop_front()),
            6 => {
                let index = rng.gen_range(0..=len);
                let count = rng.gen_range(0..2 * B + 2);
                ours.insert_n(ours.cursor(index), count, step);
                for _ in 0..count {
                    model.insert(index, step);
                }
            }
            7 if len > 0 => {
                let index = rng.gen_range(0..len);
                ours.erase(ours.cursor(index));
                model.remove(index);
            }
            8 => {
                let start = rng.gen_range(0..=len);
                let end = rng.gen_range(start..=len);
                ours.erase_range(ours.cursor(start), ours.cursor(end));
                model.drain(start..end);
            }
            9 => {
                let new_len = rng.gen_range(0..=len + B);
                ours.resize(new_len, step);
                model.resize(new_len, step);
            }
            10 if rng.gen_bool(0.1) => {
                ours.shrink_to_fit();
            }
            _ => {}
        }
        check(&ours);
        assert!(ours.iter().eq(model.iter()), "diverged at step {step}");
    }
}

#[test]
fn t_matches_vec_deque() {
    differential::<1>(1);
    differential::<2>(2);
    differential::<3>(3);
    differential::<8>(4);
    differential::<16>(5);
}
