//! Flow graph building.
//!
//! Deterministic mapping from a computed breakdown into the hub-and-spoke
//! Sankey topology: each material feeds the extraction hub, each lifecycle
//! phase feeds the total sink independently. A sequential (cumulative)
//! topology would violate Sankey conservation at every stage boundary, so
//! phases deliberately do not chain into each other.

use crate::error::{EngineError, EngineResult};
use crate::result::{FlowLink, FlowNode, MaterialDetail, NodePhase, PhaseBreakdown};
use crate::rounding::round4;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use std::collections::HashMap;

/// Flows with a magnitude at or below this threshold (kg CO2e) are
/// filtered out; zero-width Sankey ribbons render degenerately. Applied
/// identically by the builder and by edge rebuilding during recalculation
/// so both graphs stay structurally comparable.
pub const NEGLIGIBLE_FLOW_KG: f64 = 0.001;

/// Node id of the end-of-life phase.
pub const EOL_NODE_ID: &str = "eol";

/// Node id of the total sink.
pub const TOTAL_NODE_ID: &str = "total";

/// Node id of the extraction hub.
pub const EXTRACTION_NODE_ID: &str = "extraction";

/// An assembled flow graph, validated acyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowGraph {
    /// Graph nodes
    pub nodes: Vec<FlowNode>,
    /// Graph edges, magnitudes rounded
    pub links: Vec<FlowLink>,
}

/// Build the flow graph for a computed breakdown.
///
/// One node per material plus the six phase/sink nodes are always present;
/// only links are subject to the negligible-flow filter. Edge magnitudes
/// come from the already-rounded detail impacts and breakdown values so
/// the `eol -> total` edge always equals `|end_of_life|` exactly.
pub fn build_flow_graph(
    details: &[MaterialDetail],
    breakdown: &PhaseBreakdown,
) -> EngineResult<FlowGraph> {
    let mut nodes = Vec::with_capacity(details.len() + 6);
    let mut links = Vec::with_capacity(details.len() + 5);

    for detail in details {
        nodes.push(FlowNode {
            id: material_node_id(detail.name.as_str()),
            label: display_label(detail.name.as_str()),
            phase: NodePhase::Material,
        });
    }

    nodes.push(FlowNode {
        id: EXTRACTION_NODE_ID.to_string(),
        label: "Raw Material Extraction".to_string(),
        phase: NodePhase::Extraction,
    });
    nodes.push(FlowNode {
        id: "manufacturing".to_string(),
        label: "Manufacturing".to_string(),
        phase: NodePhase::Manufacturing,
    });
    nodes.push(FlowNode {
        id: "transport".to_string(),
        label: "Transportation".to_string(),
        phase: NodePhase::Transport,
    });
    nodes.push(FlowNode {
        id: "use".to_string(),
        label: "Use Phase".to_string(),
        phase: NodePhase::Use,
    });
    nodes.push(FlowNode {
        id: EOL_NODE_ID.to_string(),
        label: "End of Life".to_string(),
        phase: NodePhase::Eol,
    });
    nodes.push(FlowNode {
        id: TOTAL_NODE_ID.to_string(),
        label: "Total CO2e".to_string(),
        phase: NodePhase::Total,
    });

    // Materials feed the extraction hub
    for detail in details {
        push_flow(
            &mut links,
            material_node_id(detail.name.as_str()),
            EXTRACTION_NODE_ID.to_string(),
            detail.impact_kg_co2e,
        );
    }

    // Phases feed the total sink independently
    push_flow(
        &mut links,
        EXTRACTION_NODE_ID.to_string(),
        TOTAL_NODE_ID.to_string(),
        breakdown.materials,
    );
    push_flow(
        &mut links,
        "manufacturing".to_string(),
        TOTAL_NODE_ID.to_string(),
        breakdown.manufacturing,
    );
    push_flow(
        &mut links,
        "transport".to_string(),
        TOTAL_NODE_ID.to_string(),
        breakdown.transport,
    );
    push_flow(
        &mut links,
        "use".to_string(),
        TOTAL_NODE_ID.to_string(),
        breakdown.use_phase,
    );

    // The end-of-life edge goes through the same rebuild operation the
    // scenario recalculator uses, so the two can never diverge.
    rebuild_eol_edge(&mut links, breakdown.end_of_life);

    validate_acyclic(&nodes, &links)?;

    Ok(FlowGraph { nodes, links })
}

/// Rebuild the single `eol -> total` edge for a new end-of-life value.
///
/// Updates the edge in place when present, inserts it when the value has
/// become significant, and removes it when the value has dropped below the
/// rendering threshold. Shared by [`build_flow_graph`] and
/// [`recalculate`](crate::scenario::recalculate).
pub fn rebuild_eol_edge(links: &mut Vec<FlowLink>, end_of_life: f64) {
    let value = round4(end_of_life.abs());
    let position = links
        .iter()
        .position(|l| l.source == EOL_NODE_ID && l.target == TOTAL_NODE_ID);

    if value > NEGLIGIBLE_FLOW_KG {
        let link = FlowLink {
            source: EOL_NODE_ID.to_string(),
            target: TOTAL_NODE_ID.to_string(),
            value,
            credit: end_of_life < 0.0,
        };
        match position {
            Some(idx) => links[idx] = link,
            None => links.push(link),
        }
    } else if let Some(idx) = position {
        links.remove(idx);
    }
}

/// Append a flow edge unless its magnitude is negligible.
fn push_flow(links: &mut Vec<FlowLink>, source: String, target: String, contribution: f64) {
    let value = round4(contribution.abs());
    if value > NEGLIGIBLE_FLOW_KG {
        links.push(FlowLink {
            source,
            target,
            value,
            credit: contribution < 0.0,
        });
    }
}

/// Node id for a material.
pub fn material_node_id(name: &str) -> String {
    format!("mat_{}", name)
}

/// Rendering label for a material key: `stainless_steel` -> `Stainless Steel`.
pub fn display_label(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Verify the assembled graph is a DAG.
///
/// The hub-and-spoke construction cannot produce a cycle, but the invariant
/// is structural to the contract, so it is checked rather than assumed.
fn validate_acyclic(nodes: &[FlowNode], links: &[FlowLink]) -> EngineResult<()> {
    let mut graph: DiGraph<&str, f64> = DiGraph::new();
    let mut indices = HashMap::with_capacity(nodes.len());

    for node in nodes {
        indices.insert(node.id.as_str(), graph.add_node(node.id.as_str()));
    }
    for link in links {
        if let (Some(&from), Some(&to)) = (
            indices.get(link.source.as_str()),
            indices.get(link.target.as_str()),
        ) {
            graph.add_edge(from, to, link.value);
        }
    }

    match toposort(&graph, None) {
        Ok(_) => Ok(()),
        Err(cycle) => Err(EngineError::GraphCycle {
            node: graph[cycle.node_id()].to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
