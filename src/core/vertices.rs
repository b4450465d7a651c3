use super::error::InvalidVertex;

/// Dense set of vertices identified by indices `0..vertex_count()`.
pub trait VertexSet {
    fn vertex_count(&self) -> usize;

    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns an error if the vertex is not in the graph.
    fn check_vertex(&self, vertex: usize) -> Result<(), InvalidVertex> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(InvalidVertex::new(vertex, self.vertex_count()))
        }
    }
}

macro_rules! deref_vertex_set {
    ($($ref_kind:tt)*) => {
        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn contains_vertex(&self, vertex: usize) -> bool {
                (**self).contains_vertex(vertex)
            }

            fn check_vertex(&self, vertex: usize) -> Result<(), InvalidVertex> {
                (**self).check_vertex(vertex)
            }
        }
    }
}

deref_vertex_set!(&);
deref_vertex_set!(&mut);
