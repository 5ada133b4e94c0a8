use bumpalo::Bump;
use core::fmt;
use std::{cell::Cell, fmt::Display, ptr};

/*
 * A single list cell. The value is fixed at allocation time; the link to
 * the next cell goes through a Cell so already-allocated nodes can be
 * relinked (delete, reverse, create_cycle) while living in the arena.
 */
struct Node<'a, T> {
    value: T,
    next: Cell<Option<&'a Node<'a, T>>>,
}

/*
 * Singly linked list over arena-allocated nodes.
 *
 * All nodes are allocated from a caller-owned bump arena so they share one
 * lifetime, which lets any node point at any other (including backwards,
 * for the manufactured-cycle case). The arena owns the storage; the list
 * only owns the links. Unlinked nodes stay in the arena until it is
 * dropped.
 *
 * Every traversal except has_cycle assumes the chain is acyclic and will
 * not terminate on a cyclic list.
 */
pub struct LinkedList<'a, T> {
    head: Option<&'a Node<'a, T>>,
    arena: &'a Bump,
}

/*
 * Result of find_middle_value. The source exercise returns a different
 * shape per case, so each case is its own variant rather than a single
 * Option.
 */
#[derive(Debug, PartialEq, Eq)]
pub enum MiddleValue<'a, T> {
    Empty,
    Value(&'a T),
    OnlyTwoNodes,
    Between(&'a T, &'a T),
}

impl<'a, T: Display> Display for MiddleValue<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiddleValue::Empty => write!(f, "empty list"),
            MiddleValue::Value(v) => write!(f, "{}", v),
            MiddleValue::OnlyTwoNodes => write!(f, "only 2 nodes in the list"),
            MiddleValue::Between(x, y) => {
                write!(f, "not quite the middle, but the middle is between {} and {}", x, y)
            }
        }
    }
}

impl<'a, T> LinkedList<'a, T> {
    pub fn new_in(arena: &'a Bump) -> Self {
        LinkedList { head: None, arena }
    }

    fn alloc(&self, value: T) -> &'a Node<'a, T> {
        self.arena.alloc(Node {
            value,
            next: Cell::new(None),
        })
    }

    /*
     * Last node of the chain, found by full traversal.
     */
    fn tail(&self) -> Option<&'a Node<'a, T>> {
        let mut curr = self.head?;
        while let Some(next) = curr.next.get() {
            curr = next;
        }
        Some(curr)
    }

    /*
     * Prepend a value, O(1).
     */
    pub fn add_first(&mut self, value: T) {
        let node = self.alloc(value);
        node.next.set(self.head);
        self.head = Some(node);
    }

    /*
     * Append a value after a full traversal, O(n).
     */
    pub fn add_last(&mut self, value: T) {
        let node = self.alloc(value);
        match self.tail() {
            Some(tail) => tail.next.set(Some(node)),
            None => self.head = Some(node),
        }
    }

    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut curr = self.head;
        while let Some(node) = curr {
            if node.value == *value {
                return true;
            }
            curr = node.next.get();
        }
        false
    }

    pub fn find_max(&self) -> Option<&'a T>
    where
        T: Ord,
    {
        let head = self.head?;
        let mut max = &head.value;
        let mut curr = head.next.get();
        while let Some(node) = curr {
            if node.value > *max {
                max = &node.value;
            }
            curr = node.next.get();
        }
        Some(max)
    }

    pub fn find_min(&self) -> Option<&'a T>
    where
        T: Ord,
    {
        let head = self.head?;
        let mut min = &head.value;
        let mut curr = head.next.get();
        while let Some(node) = curr {
            if node.value < *min {
                min = &node.value;
            }
            curr = node.next.get();
        }
        Some(min)
    }

    /*
     * Node count. Not cached, recomputed by traversal each time.
     */
    pub fn length(&self) -> usize {
        let mut count = 0;
        let mut curr = self.head;
        while let Some(node) = curr {
            count += 1;
            curr = node.next.get();
        }
        count
    }

    /*
     * Value at the zero-based index, or None if the list is shorter.
     */
    pub fn get_at_index(&self, index: usize) -> Option<&'a T> {
        let mut curr = self.head;
        for _ in 0..index {
            curr = curr?.next.get();
        }
        curr.map(|node| &node.value)
    }

    pub fn get_first(&self) -> Option<&'a T> {
        self.head.map(|node| &node.value)
    }

    pub fn get_last(&self) -> Option<&'a T> {
        self.tail().map(|node| &node.value)
    }

    /*
     * Render the chain as "LL = v1 -> v2 -> ... -> vn", or "empty list".
     */
    pub fn visit(&self) -> String
    where
        T: Display,
    {
        let head = match self.head {
            Some(head) => head,
            None => return String::from("empty list"),
        };
        let mut printout = format!("LL = {}", head.value);
        let mut curr = head.next.get();
        while let Some(node) = curr {
            printout.push_str(&format!(" -> {}", node.value));
            curr = node.next.get();
        }
        printout
    }

    /*
     * Unlink the first node matching the value, relinking its predecessor
     * to its successor. Silently does nothing if no node matches.
     */
    pub fn delete(&mut self, value: &T)
    where
        T: PartialEq,
    {
        let mut prev: Option<&'a Node<'a, T>> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            if node.value == *value {
                match prev {
                    None => self.head = node.next.get(),
                    Some(prev) => prev.next.set(node.next.get()),
                }
                return;
            }
            prev = Some(node);
            curr = node.next.get();
        }
    }

    /*
     * Reverse in place by flipping every next link to point at the
     * predecessor. One pass, no extra allocation; 0- and 1-node lists
     * come out unchanged.
     */
    pub fn reverse(&mut self) {
        let mut prev: Option<&'a Node<'a, T>> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            let upcoming = node.next.get();
            node.next.set(prev);
            prev = Some(node);
            curr = upcoming;
        }
        self.head = prev;
    }

    /*
     * Structural middle via a slow/fast pointer pair, without counting the
     * nodes first. Odd-length lists have an exact middle node; even
     * lengths >= 4 report the two straddling values; empty, 1- and 2-node
     * lists each get their own variant.
     */
    pub fn find_middle_value(&self) -> MiddleValue<'a, T> {
        let Some(head) = self.head else {
            return MiddleValue::Empty;
        };
        let Some(second) = head.next.get() else {
            return MiddleValue::Value(&head.value);
        };
        if second.next.get().is_none() {
            return MiddleValue::OnlyTwoNodes;
        }

        let mut slow = head;
        let mut fast = head;
        while let Some(ahead) = fast.next.get() {
            match ahead.next.get() {
                Some(two_ahead) => {
                    fast = two_ahead;
                    // slow trails fast, so its next link is always present here
                    match slow.next.get() {
                        Some(next) => slow = next,
                        None => break,
                    }
                }
                // fast has one link left: even count, middle falls between two nodes
                None => {
                    return match slow.next.get() {
                        Some(after) => MiddleValue::Between(&slow.value, &after.value),
                        None => MiddleValue::Value(&slow.value),
                    };
                }
            }
        }
        MiddleValue::Value(&slow.value)
    }

    /*
     * Value of the nth node counted from the tail, zero-based. A lead
     * pointer walks n links ahead, then both pointers advance until the
     * lead reaches the tail; the trailing pointer lands on the answer.
     * None if the list holds fewer than n + 1 nodes.
     */
    pub fn find_nth_from_end(&self, n: usize) -> Option<&'a T> {
        let mut lead = self.head?;
        for _ in 0..n {
            lead = lead.next.get()?;
        }
        let mut trail = self.head?;
        while let Some(next) = lead.next.get() {
            lead = next;
            trail = trail.next.get()?;
        }
        Some(&trail.value)
    }

    /*
     * Floyd cycle detection: the fast pointer moves two links per step,
     * the slow pointer one. If fast runs off the end there is no cycle;
     * if both ever land on the identical node there is one. The only
     * operation guaranteed to terminate on a cyclic chain.
     */
    pub fn has_cycle(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;
        while let Some(node) = fast {
            fast = match node.next.get() {
                Some(next) => next.next.get(),
                None => return false,
            };
            slow = slow.and_then(|node| node.next.get());
            if let (Some(s), Some(f)) = (slow, fast) {
                if ptr::eq(s, f) {
                    return true;
                }
            }
        }
        false
    }

    /*
     * Insert keeping ascending order, assuming the list is already sorted:
     * the new node goes in front of the first node with a value >= the new
     * one, or at the tail if every value is smaller.
     */
    pub fn insert_ascending(&mut self, value: T)
    where
        T: Ord,
    {
        let mut prev: Option<&'a Node<'a, T>> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            if value <= node.value {
                break;
            }
            prev = Some(node);
            curr = node.next.get();
        }
        let node = self.alloc(value);
        node.next.set(curr);
        match prev {
            None => self.head = Some(node),
            Some(prev) => prev.next.set(Some(node)),
        }
    }

    /*
     * Test support: link the tail back to the head, turning the chain into
     * one loop. No-op on an empty list. Every operation except has_cycle
     * is out of contract afterwards.
     */
    pub fn create_cycle(&mut self) {
        if let Some(tail) = self.tail() {
            tail.next.set(self.head);
        }
    }
}
