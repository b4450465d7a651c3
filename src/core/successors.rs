use super::vertices::VertexSet;

/// Outgoing adjacency of a directed graph.
pub trait Successors: VertexSet {
    type SuccessorsIter<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Returns the heads of all edges going out of `vertex`, in the order in
    /// which the edges were added.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in the graph.
    fn successors(&self, vertex: usize) -> Self::SuccessorsIter<'_>;

    fn out_degree(&self, vertex: usize) -> usize {
        self.successors(vertex).count()
    }
}

macro_rules! deref_successors {
    ($($ref_kind:tt)*) => {
        impl<G> Successors for $($ref_kind)* G
        where
            G: Successors,
        {
            type SuccessorsIter<'a> = G::SuccessorsIter<'a>
            where
                Self: 'a;

            fn successors(&self, vertex: usize) -> Self::SuccessorsIter<'_> {
                (**self).successors(vertex)
            }

            fn out_degree(&self, vertex: usize) -> usize {
                (**self).out_degree(vertex)
            }
        }
    }
}

deref_successors!(&);
deref_successors!(&mut);
