//! The mesh: arena-stored vertices, edges, and faces with incremental
//! construction, topology queries, and normalization.
//!
//! # Representation
//!
//! Entities live in three [`SlotMap`] arenas keyed by [`VertexKey`],
//! [`EdgeKey`], and [`FaceKey`]. All inter-entity references are keys, never
//! pointers, so the mesh owns everything and a deep clone is a re-keying
//! pass. Keys are versioned and never reused within a mesh lifetime, even
//! after removals.
//!
//! An auxiliary hash map from canonical [`VertexPair`]s to edges makes
//! [`Mesh::add_edge`] idempotent in O(1): asking twice for the edge between
//! the same two vertices returns the same key.
//!
//! # Construction protocol
//!
//! Build a mesh by adding vertices first and faces second; edges are created
//! implicitly while faces are registered. [`Mesh::add_face`] compares the
//! proposed winding against the running mesh centroid and reverses the vertex
//! order when the face normal points inward, so counter-clockwise orientation
//! (seen from outside) is a post-condition of construction rather than a
//! caller obligation. The correction is suppressed while the mesh has fewer
//! than four vertices and no meaningful center.
//!
//! # Thread safety
//!
//! A single readers-writer lock guards the structural collections, so a mesh
//! can be read and mutated concurrently from `&self`. The mesh centroid and
//! per-face geometry are cached under the double-checked pattern; every
//! structural mutation invalidates both caches and bumps a generation
//! counter inside the write region.
//!
//! # Examples
//!
//! ```rust
//! use conway::core::mesh::Mesh;
//! use conway::geometry::Vector3;
//!
//! let mesh = Mesh::new("triangle-fan");
//! let a = mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0));
//! let b = mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0));
//! let c = mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0));
//! mesh.add_face(&[a, b, c]).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.edge_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.stats(), "triangle-fan: V=3, E=3, F=1, χ=1");
//! ```

use crate::core::collections::{FastHashMap, FastHashSet};
use crate::core::edge::{Edge, VertexPair};
use crate::core::face::{Face, FaceGeometry};
use crate::core::vertex::Vertex;
use crate::geometry::normal::newell_normal;
use crate::geometry::stats::{BoundingBox, GeometryStats};
use crate::geometry::vector::Vector3;
use slotmap::{SlotMap, new_key_type};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

new_key_type! {
    /// Identifier of a vertex within one mesh.
    pub struct VertexKey;
    /// Identifier of an edge within one mesh.
    pub struct EdgeKey;
    /// Identifier of a face within one mesh.
    pub struct FaceKey;
}

/// Structural state guarded by the mesh lock.
#[derive(Default)]
struct MeshInner {
    vertices: SlotMap<VertexKey, Vertex>,
    edges: SlotMap<EdgeKey, Edge>,
    faces: SlotMap<FaceKey, Face>,
    edge_index: FastHashMap<VertexPair, EdgeKey>,
}

impl MeshInner {
    /// Idempotent edge creation through the pair index.
    fn add_edge(&mut self, a: VertexKey, b: VertexKey) -> Option<EdgeKey> {
        if a == b || !self.vertices.contains_key(a) || !self.vertices.contains_key(b) {
            return None;
        }

        let pair = VertexPair::new(a, b);
        if let Some(&existing) = self.edge_index.get(&pair) {
            return Some(existing);
        }

        let edge = self.edges.insert(Edge::new(a, b));
        self.edge_index.insert(pair, edge);
        if let Some(vertex) = self.vertices.get_mut(a) {
            vertex.attach_edge(edge);
        }
        if let Some(vertex) = self.vertices.get_mut(b) {
            vertex.attach_edge(edge);
        }
        Some(edge)
    }

    /// Detaches and drops an edge: endpoint incidence, bounded faces' edge
    /// sequences, and the pair index all forget it. Faces themselves survive.
    fn remove_edge(&mut self, key: EdgeKey) -> bool {
        let Some(edge) = self.edges.remove(key) else {
            return false;
        };

        let (a, b) = edge.endpoints();
        if let Some(vertex) = self.vertices.get_mut(a) {
            vertex.detach_edge(key);
        }
        if let Some(vertex) = self.vertices.get_mut(b) {
            vertex.detach_edge(key);
        }
        for &face in edge.faces() {
            if let Some(face) = self.faces.get_mut(face) {
                face.remove_edge(key);
            }
        }
        self.edge_index.remove(&VertexPair::new(a, b));
        true
    }

    /// Detaches and drops a face. Vertices and edges that become orphaned are
    /// left in place.
    fn remove_face(&mut self, key: FaceKey) -> bool {
        let Some(face) = self.faces.remove(key) else {
            return false;
        };

        for &vertex in face.vertices() {
            if let Some(vertex) = self.vertices.get_mut(vertex) {
                vertex.detach_face(key);
            }
        }
        for &edge in face.edges() {
            if let Some(edge) = self.edges.get_mut(edge) {
                edge.detach_face(key);
            }
        }
        true
    }

    /// Arithmetic mean of all vertex positions (zero for an empty mesh).
    fn centroid(&self) -> Vector3 {
        if self.vertices.is_empty() {
            return Vector3::ZERO;
        }
        let sum = self
            .vertices
            .values()
            .fold(Vector3::ZERO, |acc, vertex| acc + vertex.position());
        #[allow(clippy::cast_precision_loss)]
        let count = self.vertices.len() as f64;
        sum * (1.0 / count)
    }

    /// Positions of the given vertices, skipping stale keys.
    fn positions_of(&self, keys: &[VertexKey]) -> Vec<Vector3> {
        keys.iter()
            .filter_map(|&key| self.vertices.get(key).map(Vertex::position))
            .collect()
    }

    /// Cached-or-computed geometry record for a face.
    fn face_geometry(&self, face: &Face) -> FaceGeometry {
        if let Some(cached) = face.cached_geometry() {
            return cached;
        }
        let positions = self.positions_of(face.vertices());
        face.store_geometry(compute_face_geometry(&positions))
    }
}

/// Computes a face geometry record from boundary positions.
///
/// The normal comes from Newell's method; for polygons where that degenerates
/// (collinear boundary) the cross product of the first two boundary edges is
/// used instead, and a fully degenerate face gets the zero normal. The area
/// is the fan-triangulation sum, which matches the planar polygon area for
/// the near-flat faces produced here.
fn compute_face_geometry(positions: &[Vector3]) -> FaceGeometry {
    let n = positions.len();
    if n == 0 {
        return FaceGeometry {
            normal: Vector3::ZERO,
            centroid: Vector3::ZERO,
            area: 0.0,
        };
    }

    let sum = positions
        .iter()
        .fold(Vector3::ZERO, |acc, &position| acc + position);
    #[allow(clippy::cast_precision_loss)]
    let centroid = sum * (1.0 / n as f64);

    let normal = if n < 3 {
        Vector3::ZERO
    } else {
        newell_normal(positions).unwrap_or_else(|_| {
            let u = positions[1] - positions[0];
            let v = positions[2] - positions[0];
            u.cross(v).normalized()
        })
    };

    let mut area = 0.0;
    for i in 1..n.saturating_sub(1) {
        let u = positions[i] - positions[0];
        let v = positions[i + 1] - positions[0];
        area += u.cross(v).length() * 0.5;
    }

    FaceGeometry {
        normal,
        centroid,
        area,
    }
}

/// `V − E + F` over raw counts.
#[allow(clippy::cast_possible_wrap)]
fn euler_of(vertices: usize, edges: usize, faces: usize) -> isize {
    vertices as isize - edges as isize + faces as isize
}

/// Reverses `order` in place when its Newell normal points inward relative
/// to `center`. Leaves the order untouched when no normal can be computed.
fn ensure_counter_clockwise(inner: &MeshInner, order: &mut [VertexKey], center: Vector3) {
    let positions = inner.positions_of(order);
    let Ok(normal) = newell_normal(&positions) else {
        return;
    };

    let sum = positions
        .iter()
        .fold(Vector3::ZERO, |acc, &position| acc + position);
    #[allow(clippy::cast_precision_loss)]
    let face_centroid = sum * (1.0 / positions.len() as f64);

    let outward = (face_centroid - center).normalized();
    if normal.dot(outward) < 0.0 {
        order.reverse();
    }
}

/// A polyhedral mesh.
///
/// See the [module documentation](self) for the representation and the
/// construction protocol. Meshes are pure values with interior mutability:
/// operators take a `&Mesh` and build a fresh output mesh, never mutating
/// their input.
pub struct Mesh {
    name: String,
    inner: RwLock<MeshInner>,
    centroid: RwLock<Option<Vector3>>,
    generation: AtomicU64,
}

impl Mesh {
    /// Creates an empty mesh with the given diagnostic name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: RwLock::new(MeshInner::default()),
            centroid: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, MeshInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MeshInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Invalidates every derived cache. Called at the end of each structural
    /// mutation, while the caller still holds the write guard.
    fn invalidate_caches(&self, inner: &MeshInner) {
        self.generation.fetch_add(1, Ordering::Release);
        *self
            .centroid
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        for face in inner.faces.values() {
            face.invalidate_geometry();
        }
    }

    // =========================================================================
    // IDENTITY AND COUNTS
    // =========================================================================

    /// Diagnostic name of the mesh (e.g. `"Cube"` or `"dtC"`).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the diagnostic name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.read().vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.read().edges.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.read().faces.len()
    }

    /// Euler characteristic `V − E + F`; 2 for every valid closed mesh.
    #[must_use]
    pub fn euler_characteristic(&self) -> isize {
        let inner = self.read();
        euler_of(inner.vertices.len(), inner.edges.len(), inner.faces.len())
    }

    /// Monotonically increasing structural generation counter.
    ///
    /// Bumped by every mutation; lets callers detect staleness of data they
    /// derived from an earlier snapshot.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// `"<name>: V=<v>, E=<e>, F=<f>, χ=<chi>"`.
    #[must_use]
    pub fn stats(&self) -> String {
        let inner = self.read();
        let chi = euler_of(inner.vertices.len(), inner.edges.len(), inner.faces.len());
        format!(
            "{}: V={}, E={}, F={}, χ={}",
            self.name,
            inner.vertices.len(),
            inner.edges.len(),
            inner.faces.len(),
            chi
        )
    }

    // =========================================================================
    // ENUMERATION
    // =========================================================================

    /// Keys of all vertices, in storage order.
    #[must_use]
    pub fn vertex_keys(&self) -> Vec<VertexKey> {
        self.read().vertices.keys().collect()
    }

    /// Keys of all edges, in storage order.
    #[must_use]
    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.read().edges.keys().collect()
    }

    /// Keys of all faces, in storage order.
    #[must_use]
    pub fn face_keys(&self) -> Vec<FaceKey> {
        self.read().faces.keys().collect()
    }

    // =========================================================================
    // VERTEX QUERIES
    // =========================================================================

    /// Whether `vertex` is present.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexKey) -> bool {
        self.read().vertices.contains_key(vertex)
    }

    /// Position of a vertex.
    #[must_use]
    pub fn position(&self, vertex: VertexKey) -> Option<Vector3> {
        self.read().vertices.get(vertex).map(Vertex::position)
    }

    /// Number of edges incident to a vertex.
    #[must_use]
    pub fn vertex_degree(&self, vertex: VertexKey) -> Option<usize> {
        self.read().vertices.get(vertex).map(Vertex::degree)
    }

    /// Edges incident to a vertex, in first-attachment order.
    ///
    /// Empty for an unknown vertex. For a cyclic walk use
    /// [`Mesh::edges_around_vertex`].
    #[must_use]
    pub fn vertex_edges(&self, vertex: VertexKey) -> Vec<EdgeKey> {
        self.read()
            .vertices
            .get(vertex)
            .map(|v| v.edges().to_vec())
            .unwrap_or_default()
    }

    /// Faces incident to a vertex, in first-attachment order.
    ///
    /// Empty for an unknown vertex. For a cyclic walk use
    /// [`Mesh::faces_around_vertex`].
    #[must_use]
    pub fn vertex_faces(&self, vertex: VertexKey) -> Vec<FaceKey> {
        self.read()
            .vertices
            .get(vertex)
            .map(|v| v.faces().to_vec())
            .unwrap_or_default()
    }

    // =========================================================================
    // EDGE QUERIES
    // =========================================================================

    /// The edge joining `a` and `b` in either order, if one exists.
    #[must_use]
    pub fn find_edge(&self, a: VertexKey, b: VertexKey) -> Option<EdgeKey> {
        self.read().edge_index.get(&VertexPair::new(a, b)).copied()
    }

    /// Endpoints of an edge, in creation order.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeKey) -> Option<(VertexKey, VertexKey)> {
        self.read().edges.get(edge).map(Edge::endpoints)
    }

    /// The endpoint of `edge` opposite `vertex`, or `None` when `vertex` is
    /// not an endpoint.
    #[must_use]
    pub fn other_vertex(&self, edge: EdgeKey, vertex: VertexKey) -> Option<VertexKey> {
        self.read().edges.get(edge)?.other_vertex(vertex)
    }

    /// Faces incident to an edge (2 on a closed manifold).
    #[must_use]
    pub fn edge_faces(&self, edge: EdgeKey) -> Vec<FaceKey> {
        self.read()
            .edges
            .get(edge)
            .map(|e| e.faces().to_vec())
            .unwrap_or_default()
    }

    /// Midpoint of an edge.
    #[must_use]
    pub fn edge_midpoint(&self, edge: EdgeKey) -> Option<Vector3> {
        let inner = self.read();
        let (a, b) = inner.edges.get(edge)?.endpoints();
        let a = inner.vertices.get(a)?.position();
        let b = inner.vertices.get(b)?.position();
        Some((a + b) * 0.5)
    }

    /// Length of an edge.
    #[must_use]
    pub fn edge_length(&self, edge: EdgeKey) -> Option<f64> {
        let inner = self.read();
        let (a, b) = inner.edges.get(edge)?.endpoints();
        let a = inner.vertices.get(a)?.position();
        let b = inner.vertices.get(b)?.position();
        Some(a.distance(b))
    }

    // =========================================================================
    // FACE QUERIES
    // =========================================================================

    /// Boundary vertices of a face, counter-clockwise from outside.
    ///
    /// Empty for an unknown face.
    #[must_use]
    pub fn face_vertices(&self, face: FaceKey) -> Vec<VertexKey> {
        self.read()
            .faces
            .get(face)
            .map(|f| f.vertices().to_vec())
            .unwrap_or_default()
    }

    /// Boundary edges of a face; element `i` joins boundary vertex `i` to its
    /// successor. Empty for an unknown face.
    #[must_use]
    pub fn face_edges(&self, face: FaceKey) -> Vec<EdgeKey> {
        self.read()
            .faces
            .get(face)
            .map(|f| f.edges().to_vec())
            .unwrap_or_default()
    }

    /// Number of boundary vertices of a face.
    #[must_use]
    pub fn face_degree(&self, face: FaceKey) -> Option<usize> {
        self.read().faces.get(face).map(Face::degree)
    }

    /// Centroid of a face (cached).
    #[must_use]
    pub fn face_centroid(&self, face: FaceKey) -> Option<Vector3> {
        let inner = self.read();
        let face = inner.faces.get(face)?;
        Some(inner.face_geometry(face).centroid)
    }

    /// Unit outward normal of a face (cached; zero for degenerate faces).
    #[must_use]
    pub fn face_normal(&self, face: FaceKey) -> Option<Vector3> {
        let inner = self.read();
        let face = inner.faces.get(face)?;
        Some(inner.face_geometry(face).normal)
    }

    /// Area of a face (cached).
    #[must_use]
    pub fn face_area(&self, face: FaceKey) -> Option<f64> {
        let inner = self.read();
        let face = inner.faces.get(face)?;
        Some(inner.face_geometry(face).area)
    }

    // =========================================================================
    // ORDERED RING TRAVERSALS
    // =========================================================================

    /// Edges incident to `vertex` in cyclic order.
    ///
    /// Starting from an arbitrary incident edge, the walk repeatedly advances
    /// to an unvisited incident edge that shares a face with the current one.
    /// When no such edge exists (degenerate or partially built meshes) an
    /// arbitrary unvisited incident edge is taken instead, which keeps the
    /// traversal total; for valid manifold meshes the fallback never fires
    /// and the result is a consistent cyclic walk.
    #[must_use]
    pub fn edges_around_vertex(&self, vertex: VertexKey) -> Vec<EdgeKey> {
        let inner = self.read();
        let Some(v) = inner.vertices.get(vertex) else {
            return Vec::new();
        };
        let edges = v.edges();
        if edges.len() <= 2 {
            return edges.to_vec();
        }

        let mut ordered = Vec::with_capacity(edges.len());
        let mut visited: FastHashSet<EdgeKey> = FastHashSet::default();
        let mut current = edges[0];
        ordered.push(current);
        visited.insert(current);

        while ordered.len() < edges.len() {
            let mut next = None;

            // A face incident to the vertex that contains the current edge
            // links it to its cyclic neighbour.
            'faces: for &face_key in v.faces() {
                let Some(face) = inner.faces.get(face_key) else {
                    continue;
                };
                if !face.contains_edge(current) {
                    continue;
                }
                for &candidate in face.edges() {
                    if candidate == current || visited.contains(&candidate) {
                        continue;
                    }
                    let Some(edge) = inner.edges.get(candidate) else {
                        continue;
                    };
                    if edge.has_endpoint(vertex) {
                        next = Some(candidate);
                        break 'faces;
                    }
                }
            }

            // Fallback: no linked neighbour, take any unvisited incident edge.
            let next = next.or_else(|| {
                edges.iter().copied().find(|e| !visited.contains(e))
            });
            let Some(next) = next else {
                break;
            };
            ordered.push(next);
            visited.insert(next);
            current = next;
        }

        ordered
    }

    /// Faces incident to `vertex` in cyclic order.
    ///
    /// Analogous to [`Mesh::edges_around_vertex`]: the walk advances to an
    /// unvisited incident face sharing an edge with the current one, with an
    /// arbitrary-face fallback that keeps the traversal total on degenerate
    /// input.
    #[must_use]
    pub fn faces_around_vertex(&self, vertex: VertexKey) -> Vec<FaceKey> {
        let inner = self.read();
        let Some(v) = inner.vertices.get(vertex) else {
            return Vec::new();
        };
        let faces = v.faces();
        if faces.len() <= 2 {
            return faces.to_vec();
        }

        let mut ordered = Vec::with_capacity(faces.len());
        let mut visited: FastHashSet<FaceKey> = FastHashSet::default();
        let mut current = faces[0];
        ordered.push(current);
        visited.insert(current);

        while ordered.len() < faces.len() {
            let mut next = None;

            'edges: for &edge_key in v.edges() {
                let Some(edge) = inner.edges.get(edge_key) else {
                    continue;
                };
                for &candidate_key in edge.faces() {
                    if candidate_key == current || visited.contains(&candidate_key) {
                        continue;
                    }
                    let (Some(candidate), Some(current_face)) =
                        (inner.faces.get(candidate_key), inner.faces.get(current))
                    else {
                        continue;
                    };
                    let shares_edge = current_face
                        .edges()
                        .iter()
                        .any(|&e| candidate.contains_edge(e));
                    if shares_edge {
                        next = Some(candidate_key);
                        break 'edges;
                    }
                }
            }

            let next = next.or_else(|| {
                faces.iter().copied().find(|f| !visited.contains(f))
            });
            let Some(next) = next else {
                break;
            };
            ordered.push(next);
            visited.insert(next);
            current = next;
        }

        ordered
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Adds a vertex at `position` and returns its fresh key.
    pub fn add_vertex(&self, position: Vector3) -> VertexKey {
        let mut inner = self.write();
        let key = inner.vertices.insert(Vertex::new(position));
        self.invalidate_caches(&inner);
        key
    }

    /// Adds an edge between `a` and `b`, or returns the existing edge for the
    /// unordered pair.
    ///
    /// Returns `None` when the endpoints coincide or either key is stale.
    pub fn add_edge(&self, a: VertexKey, b: VertexKey) -> Option<EdgeKey> {
        let mut inner = self.write();
        let edge = inner.add_edge(a, b)?;
        self.invalidate_caches(&inner);
        Some(edge)
    }

    /// Adds a face over the given ordered vertex sequence.
    ///
    /// Edges between consecutive vertices (including the wrap-around pair)
    /// are created or reused, and all vertex↔face and edge↔face references
    /// are wired up. The winding may be reversed to keep the face normal
    /// pointing outward; see the [module documentation](self).
    ///
    /// Returns `None` when fewer than three vertices are supplied, the
    /// sequence repeats a vertex, or any key is stale.
    pub fn add_face(&self, vertices: &[VertexKey]) -> Option<FaceKey> {
        let mut inner = self.write();

        if vertices.len() < 3 {
            return None;
        }
        let mut seen: FastHashSet<VertexKey> = FastHashSet::default();
        for &vertex in vertices {
            if !inner.vertices.contains_key(vertex) || !seen.insert(vertex) {
                return None;
            }
        }

        let mut order = vertices.to_vec();
        if inner.vertices.len() >= 4 {
            let center = inner.centroid();
            ensure_counter_clockwise(&inner, &mut order, center);
        }

        let mut boundary = Vec::with_capacity(order.len());
        for i in 0..order.len() {
            let a = order[i];
            let b = order[(i + 1) % order.len()];
            boundary.push(inner.add_edge(a, b)?);
        }

        let face = inner.faces.insert(Face::new(order.clone(), boundary.clone()));
        for edge in boundary {
            if let Some(edge) = inner.edges.get_mut(edge) {
                edge.attach_face(face);
            }
        }
        for vertex in order {
            if let Some(vertex) = inner.vertices.get_mut(vertex) {
                vertex.attach_face(face);
            }
        }

        self.invalidate_caches(&inner);
        Some(face)
    }

    /// Removes a vertex, cascading to its incident edges and faces.
    ///
    /// Returns `false` when the key is stale.
    pub fn remove_vertex(&self, vertex: VertexKey) -> bool {
        let mut inner = self.write();
        let Some(v) = inner.vertices.get(vertex) else {
            return false;
        };

        let incident_edges: Vec<EdgeKey> = v.edges().to_vec();
        let incident_faces: Vec<FaceKey> = v.faces().to_vec();
        for edge in incident_edges {
            inner.remove_edge(edge);
        }
        for face in incident_faces {
            inner.remove_face(face);
        }
        inner.vertices.remove(vertex);

        self.invalidate_caches(&inner);
        true
    }

    /// Removes an edge, detaching it from its endpoints, from incident faces'
    /// boundary sequences, and from the pair index. Incident faces survive.
    ///
    /// Returns `false` when the key is stale.
    pub fn remove_edge(&self, edge: EdgeKey) -> bool {
        let mut inner = self.write();
        let removed = inner.remove_edge(edge);
        if removed {
            self.invalidate_caches(&inner);
        }
        removed
    }

    /// Removes a face, detaching it from its vertices and edges. Entities
    /// that become orphaned are left in place.
    ///
    /// Returns `false` when the key is stale.
    pub fn remove_face(&self, face: FaceKey) -> bool {
        let mut inner = self.write();
        let removed = inner.remove_face(face);
        if removed {
            self.invalidate_caches(&inner);
        }
        removed
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Centroid of all vertex positions (cached, double-checked).
    #[must_use]
    pub fn centroid(&self) -> Vector3 {
        if let Some(cached) = *self
            .centroid
            .read()
            .unwrap_or_else(PoisonError::into_inner)
        {
            return cached;
        }

        let inner = self.read();
        let mut slot = self
            .centroid
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = *slot {
            return cached;
        }
        let computed = inner.centroid();
        *slot = Some(computed);
        computed
    }

    /// Centers the mesh at the origin and scales the farthest vertex to unit
    /// distance. No-op scaling for an empty or single-point mesh.
    pub fn normalize(&self) {
        let mut inner = self.write();

        let centroid = inner.centroid();
        for vertex in inner.vertices.values_mut() {
            vertex.set_position(vertex.position() - centroid);
        }

        let max_distance = inner
            .vertices
            .values()
            .map(|vertex| vertex.position().length())
            .fold(0.0_f64, f64::max);
        if max_distance > 0.0 {
            let scale = 1.0 / max_distance;
            for vertex in inner.vertices.values_mut() {
                vertex.set_position(vertex.position() * scale);
            }
        }

        tracing::trace!(mesh = %self.name, max_distance, "normalized");
        self.invalidate_caches(&inner);
    }

    /// Edge-length, face-area, and bounding-box summary.
    ///
    /// A mesh with no edges or no faces yields the all-zero record.
    #[must_use]
    pub fn geometry_stats(&self) -> GeometryStats {
        let inner = self.read();
        if inner.edges.is_empty() || inner.faces.is_empty() {
            return GeometryStats::default();
        }

        let mut min_edge = f64::INFINITY;
        let mut max_edge = 0.0_f64;
        let mut total_edge = 0.0;
        let mut edge_count = 0usize;
        for edge in inner.edges.values() {
            let (a, b) = edge.endpoints();
            let (Some(a), Some(b)) = (inner.vertices.get(a), inner.vertices.get(b)) else {
                continue;
            };
            let length = a.position().distance(b.position());
            min_edge = min_edge.min(length);
            max_edge = max_edge.max(length);
            total_edge += length;
            edge_count += 1;
        }

        let mut min_area = f64::INFINITY;
        let mut max_area = 0.0_f64;
        let mut total_area = 0.0;
        for face in inner.faces.values() {
            let area = inner.face_geometry(face).area;
            min_area = min_area.min(area);
            max_area = max_area.max(area);
            total_area += area;
        }

        let mut positions = inner.vertices.values().map(Vertex::position);
        let mut bounding_box = positions.next().map_or_else(BoundingBox::default, BoundingBox::at);
        for position in positions {
            bounding_box.expand(position);
        }

        #[allow(clippy::cast_precision_loss)]
        let stats = GeometryStats {
            min_edge_length: if edge_count == 0 { 0.0 } else { min_edge },
            max_edge_length: max_edge,
            avg_edge_length: if edge_count == 0 {
                0.0
            } else {
                total_edge / edge_count as f64
            },
            min_face_area: min_area,
            max_face_area: max_area,
            avg_face_area: total_area / inner.faces.len() as f64,
            bounding_box,
        };
        stats
    }
}

impl Clone for Mesh {
    /// Deep copy: fresh keys for every entity, no sharing with the source.
    ///
    /// Face boundaries are re-keyed through a source-to-clone vertex map and
    /// replayed through [`Mesh::add_face`], so the clone's edges and pair
    /// index are rebuilt consistently. Edges that bound no face are not
    /// carried over.
    fn clone(&self) -> Self {
        let inner = self.read();
        let clone = Self::new(self.name.clone());

        let mut key_map: FastHashMap<VertexKey, VertexKey> =
            FastHashMap::with_capacity_and_hasher(inner.vertices.len(), Default::default());
        for (key, vertex) in &inner.vertices {
            key_map.insert(key, clone.add_vertex(vertex.position()));
        }

        for face in inner.faces.values() {
            let vertices: Vec<VertexKey> = face
                .vertices()
                .iter()
                .filter_map(|source| key_map.get(source).copied())
                .collect();
            clone.add_face(&vertices);
        }

        clone
    }
}

impl fmt::Debug for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("Mesh")
            .field("name", &self.name)
            .field("vertices", &inner.vertices.len())
            .field("edges", &inner.edges.len())
            .field("faces", &inner.faces.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stats())
    }
}
