use smallvec::{Array, SmallVec};

/// Removes every element matching the predicate from an ordered list, preserving the relative order of everything else, and returns the removed elements in their original order.
pub(crate) fn extract_matching<A, F>(list: &mut SmallVec<A>, mut matches: F) -> SmallVec<A>
where
    A: Array,
    F: FnMut(&A::Item) -> bool,
{
    let mut extracted = SmallVec::new();
    let mut index = 0;
    while index < list.len() {
        if matches(&list[index]) {
            extracted.push(list.remove(index));
        } else {
            index += 1;
        }
    }
    extracted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order_and_keeps_the_rest_ordered() {
        let mut list: SmallVec<[i32; 4]> = SmallVec::from_slice(&[4, 3, 5, 4, 7]);
        let removed = extract_matching(&mut list, |x| *x == 4);
        assert_eq!(removed.as_slice(), &[4, 4]);
        assert_eq!(list.as_slice(), &[3, 5, 7]);
    }

    #[test]
    fn no_matches_is_a_no_op() {
        let mut list: SmallVec<[i32; 4]> = SmallVec::from_slice(&[1, 2, 3]);
        let removed = extract_matching(&mut list, |_| false);
        assert!(removed.is_empty());
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }
}
