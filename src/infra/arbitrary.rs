use arbitrary::{Arbitrary, Result, Unstructured};

use crate::storage::AdjList;

const MAX_VERTEX_COUNT: usize = 128;

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

impl<'a> Arbitrary<'a> for AdjList {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertex_count = u.int_in_range(0..=MAX_VERTEX_COUNT)?;
        let mut graph = AdjList::new(vertex_count);

        for edge in u.arbitrary_iter::<(Index, Index)>()? {
            let (from, to) = edge?;

            if let (Some(from), Some(to)) = (from.get(vertex_count), to.get(vertex_count)) {
                graph.add_edge(from, to);
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::VertexSet;

    use super::*;

    #[test]
    fn index_modulo() {
        assert_eq!(Index(7).get(3), Some(1));
        assert_eq!(Index(7).get(0), None);
    }

    #[test]
    fn graph_from_bytes() {
        let bytes = [3u8; 64];
        let mut u = Unstructured::new(&bytes);

        let graph = AdjList::arbitrary(&mut u).unwrap();

        assert!(graph.vertex_count() <= MAX_VERTEX_COUNT);
        assert!(graph
            .edges()
            .all(|(from, to)| from < graph.vertex_count() && to < graph.vertex_count()));
    }
}
