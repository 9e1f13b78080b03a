//! The built-in catalog seeded by `init`.

use crate::model::{Card, Classification, Difficulty};

const SEED_DATE: &str = "2024-12-28";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_cards() -> Vec<Card> {
    vec![
        binary_search(),
        quick_sort(),
        two_pointers(),
        dynamic_programming(),
        sliding_window(),
        array(),
        linked_list(),
        tree(),
        graph(),
    ]
}

fn binary_search() -> Card {
    let mut card = Card::new("binary-search", "Binary Search", Classification::Searches)
        .with_difficulty(Difficulty::Easy)
        .with_text(
            "Find an item in a sorted array by halving the search interval each step. \
             Compare against the middle element and continue in the half that can still \
             contain the target.",
            "def binary_search(arr, target):\n    lo, hi = 0, len(arr) - 1\n    while lo <= hi:\n        mid = (lo + hi) // 2\n        if arr[mid] == target:\n            return mid\n        if arr[mid] < target:\n            lo = mid + 1\n        else:\n            hi = mid - 1\n    return -1",
        )
        .with_complexity("O(log n)", "O(1)")
        .with_tags(["array", "search", "divide-conquer", "sorted"])
        .with_date_added(SEED_DATE);
    card.use_cases = strings(&[
        "Finding elements in sorted arrays",
        "Searching in sorted data structures",
        "Optimizing linear search",
    ]);
    card.related_problems = strings(&[
        "LeetCode 704: Binary Search",
        "LeetCode 35: Search Insert Position",
        "LeetCode 278: First Bad Version",
    ]);
    card
}

fn quick_sort() -> Card {
    Card::new("quick-sort", "Quick Sort", Classification::Sorts)
        .with_difficulty(Difficulty::Medium)
        .with_text(
            "Divide and conquer: pick a pivot, partition smaller elements to its left and \
             larger to its right, then sort both sides recursively.",
            "def quick_sort(arr):\n    if len(arr) <= 1:\n        return arr\n    pivot = arr[len(arr) // 2]\n    left = [x for x in arr if x < pivot]\n    mid = [x for x in arr if x == pivot]\n    right = [x for x in arr if x > pivot]\n    return quick_sort(left) + mid + quick_sort(right)",
        )
        .with_complexity("O(n log n) average, O(n²) worst case", "O(log n)")
        .with_tags(["array", "sort", "divide-conquer", "recursion"])
        .with_date_added(SEED_DATE)
}

fn two_pointers() -> Card {
    let mut card = Card::new("two-pointers", "Two Pointers", Classification::Heuristics)
        .with_difficulty(Difficulty::Easy)
        .with_text(
            "Walk two indexes through the data, either inward from both ends or forward at \
             different speeds, to avoid a nested loop.",
            "def pair_with_sum(arr, target):\n    i, j = 0, len(arr) - 1\n    while i < j:\n        s = arr[i] + arr[j]\n        if s == target:\n            return i, j\n        if s < target:\n            i += 1\n        else:\n            j -= 1\n    return None",
        )
        .with_complexity("O(n)", "O(1)")
        .with_tags(["array", "two-pointers", "optimization"])
        .with_date_added(SEED_DATE);
    card.use_cases = strings(&[
        "Finding pairs in sorted arrays",
        "Palindrome checking",
        "Removing duplicates",
        "Merging sorted arrays",
    ]);
    card.related_problems = strings(&[
        "LeetCode 167: Two Sum II",
        "LeetCode 125: Valid Palindrome",
        "LeetCode 283: Move Zeroes",
    ]);
    card
}

fn dynamic_programming() -> Card {
    Card::new(
        "dynamic-programming",
        "Dynamic Programming",
        Classification::Algorithms,
    )
    .with_difficulty(Difficulty::Medium)
    .with_text(
        "Break a problem into overlapping subproblems and store each answer so it is \
         computed once.",
        "def fib(n, memo={}):\n    if n <= 1:\n        return n\n    if n not in memo:\n        memo[n] = fib(n - 1) + fib(n - 2)\n    return memo[n]",
    )
    .with_complexity("O(n) for Fibonacci example", "O(n)")
    .with_tags(["optimization", "memoization", "recursion", "subproblems"])
    .with_date_added(SEED_DATE)
}

fn sliding_window() -> Card {
    Card::new("sliding-window", "Sliding Window", Classification::Patterns)
        .with_difficulty(Difficulty::Medium)
        .with_text(
            "Keep a window over a contiguous range and update it incrementally: add the \
             element entering on the right, drop the one leaving on the left.",
            "def max_sum(arr, k):\n    window = sum(arr[:k])\n    best = window\n    for i in range(k, len(arr)):\n        window += arr[i] - arr[i - k]\n        best = max(best, window)\n    return best",
        )
        .with_complexity("O(n)", "O(1)")
        .with_tags(["array", "string", "optimization", "subarray"])
        .with_date_added(SEED_DATE)
}

fn array() -> Card {
    Card::new("array", "Array", Classification::DataStructures)
        .with_difficulty(Difficulty::Easy)
        .with_text(
            "Contiguous, index-addressed storage with O(1) access. The base for two \
             pointers, sliding windows and prefix sums.",
            "def prefix_sums(arr):\n    out = [0]\n    for x in arr:\n        out.append(out[-1] + x)\n    return out",
        )
        .with_complexity("Access: O(1), Search: O(n), Insert/Delete: O(n)", "O(n)")
        .with_tags([
            "array",
            "data-structure",
            "fundamental",
            "two-pointers",
            "sliding-window",
        ])
        .with_date_added(SEED_DATE)
}

fn linked_list() -> Card {
    Card::new("linked-list", "Linked List", Classification::DataStructures)
        .with_difficulty(Difficulty::Medium)
        .with_text(
            "Nodes connected by pointers, with no contiguous memory. O(1) insertion and \
             removal at the head, O(n) access by position.",
            "def reverse(head):\n    prev = None\n    while head:\n        head.next, prev, head = prev, head, head.next\n    return prev",
        )
        .with_complexity(
            "Access: O(n), Insert/Delete at head: O(1), Insert/Delete at position: O(n)",
            "O(n)",
        )
        .with_tags(["linked-list", "data-structure", "pointers", "two-pointers"])
        .with_date_added(SEED_DATE)
}

fn tree() -> Card {
    Card::new("tree", "Tree", Classification::DataStructures)
        .with_difficulty(Difficulty::Medium)
        .with_text(
            "Hierarchical nodes under a single root. Binary trees have at most two children; \
             binary search trees keep left < node < right.",
            "def depth(node):\n    if node is None:\n        return 0\n    return 1 + max(depth(node.left), depth(node.right))",
        )
        .with_complexity(
            "Search (BST): O(log n) average, O(n) worst, Traversal: O(n)",
            "O(n) for storage, O(h) for recursion where h is height",
        )
        .with_tags([
            "tree",
            "binary-tree",
            "bst",
            "data-structure",
            "dfs",
            "bfs",
            "recursion",
        ])
        .with_date_added(SEED_DATE)
}

fn graph() -> Card {
    Card::new("graph", "Graph", Classification::DataStructures)
        .with_difficulty(Difficulty::Hard)
        .with_text(
            "Vertices joined by edges, directed or not, weighted or not. Usually stored as \
             an adjacency list or an adjacency matrix.",
            "from collections import deque\n\ndef bfs(adj, start):\n    seen = {start}\n    queue = deque([start])\n    while queue:\n        v = queue.popleft()\n        for w in adj[v]:\n            if w not in seen:\n                seen.add(w)\n                queue.append(w)\n    return seen",
        )
        .with_complexity(
            "DFS/BFS: O(V + E) where V is vertices, E is edges",
            "O(V + E) for adjacency list, O(V²) for adjacency matrix",
        )
        .with_tags([
            "graph",
            "data-structure",
            "dfs",
            "bfs",
            "traversal",
            "cycle-detection",
        ])
        .with_date_added(SEED_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let cards = builtin_cards();
        assert_eq!(cards.len(), 9);
        let ids: HashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn builtin_cards_have_content() {
        for card in builtin_cards() {
            assert!(!card.title.is_empty(), "{} has no title", card.id);
            assert!(!card.code.is_empty(), "{} has no code", card.id);
            assert!(!card.tags.is_empty(), "{} has no tags", card.id);
            assert!(card.difficulty.is_some(), "{} has no difficulty", card.id);
        }
    }
}
