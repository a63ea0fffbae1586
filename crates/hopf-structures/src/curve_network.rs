//! Curve network structure.

use std::ops::Range;

use glam::DVec3;
use hopf_core::error::{HopfError, Result};
use hopf_core::structure::{index_u32, Structure};

/// A run of consecutive nodes forming one polyline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    /// Node indices covered by this curve.
    pub nodes: Range<u32>,
    /// Whether the last node connects back to the first.
    pub closed: bool,
}

/// A curve network structure (nodes connected by edges).
///
/// Networks built from fibres also remember which nodes belong to which
/// curve, so exporters can write one polyline per fibre.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveNetwork {
    name: String,
    node_positions: Vec<DVec3>,
    edge_tail_inds: Vec<u32>,
    edge_tip_inds: Vec<u32>,
    curves: Vec<Curve>,
}

impl CurveNetwork {
    /// Creates a new curve network from nodes and edges.
    pub fn new(name: impl Into<String>, nodes: Vec<DVec3>, edges: &[[u32; 2]]) -> Result<Self> {
        let len = nodes.len();
        for &index in edges.iter().flatten() {
            if index as usize >= len {
                return Err(HopfError::IndexOutOfBounds {
                    index: index as usize,
                    len,
                });
            }
        }
        Ok(Self {
            name: name.into(),
            node_positions: nodes,
            edge_tail_inds: edges.iter().map(|e| e[0]).collect(),
            edge_tip_inds: edges.iter().map(|e| e[1]).collect(),
            curves: Vec::new(),
        })
    }

    /// Creates a curve network as a connected line (0-1-2-3-...).
    pub fn new_line(name: impl Into<String>, nodes: Vec<DVec3>) -> Result<Self> {
        let mut cn = Self::empty(name);
        cn.push_curve(nodes, false)?;
        Ok(cn)
    }

    /// Creates a curve network as a closed loop (0-1-2-...-n-0).
    pub fn new_loop(name: impl Into<String>, nodes: Vec<DVec3>) -> Result<Self> {
        let mut cn = Self::empty(name);
        cn.push_curve(nodes, true)?;
        Ok(cn)
    }

    /// Creates one curve per fibre.
    pub fn from_fibres<I>(name: impl Into<String>, fibres: I, closed: bool) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Vec<DVec3>>,
    {
        let mut cn = Self::empty(name);
        for fibre in fibres {
            cn.push_curve(fibre.into(), closed)?;
        }
        Ok(cn)
    }

    fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_positions: Vec::new(),
            edge_tail_inds: Vec::new(),
            edge_tip_inds: Vec::new(),
            curves: Vec::new(),
        }
    }

    /// Appends a polyline, connecting its nodes in order.
    ///
    /// Node indices are stored as `u32`; a network that would outgrow them
    /// fails with [`HopfError::CountOverflow`] and is left unchanged.
    pub fn push_curve(&mut self, nodes: Vec<DVec3>, closed: bool) -> Result<()> {
        const WHAT: &str = "curve network nodes";
        let start = index_u32(self.node_positions.len(), WHAT)?;
        let end = index_u32(self.node_positions.len() + nodes.len(), WHAT)?;
        self.node_positions.extend(nodes);

        for i in start..end.saturating_sub(1) {
            self.edge_tail_inds.push(i);
            self.edge_tip_inds.push(i + 1);
        }
        // A loop needs at least three nodes to be more than a doubled edge.
        if closed && end - start > 2 {
            self.edge_tail_inds.push(end - 1);
            self.edge_tip_inds.push(start);
        }
        self.curves.push(Curve {
            nodes: start..end,
            closed,
        });
        Ok(())
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.node_positions.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edge_tail_inds.len()
    }

    /// Returns the node positions.
    pub fn nodes(&self) -> &[DVec3] {
        &self.node_positions
    }

    /// Returns the edges as `[tail, tip]` pairs.
    pub fn edges(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        self.edge_tail_inds
            .iter()
            .zip(&self.edge_tip_inds)
            .map(|(&a, &b)| [a, b])
    }

    /// Returns the curves this network was assembled from.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Node index runs of each curve; closed curves repeat their first index.
    pub fn polylines(&self) -> Vec<Vec<u32>> {
        self.curves
            .iter()
            .map(|c| {
                let mut run: Vec<u32> = c.nodes.clone().collect();
                if c.closed && run.len() > 2 {
                    run.push(c.nodes.start);
                }
                run
            })
            .collect()
    }

    /// Sum of all edge lengths.
    pub fn total_length(&self) -> f64 {
        let nodes = &self.node_positions;
        self.edges()
            .map(|[a, b]| nodes[a as usize].distance(nodes[b as usize]))
            .sum()
    }
}

impl Structure for CurveNetwork {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "CurveNetwork"
    }

    fn vertices(&self) -> &[DVec3] {
        &self.node_positions
    }
}
