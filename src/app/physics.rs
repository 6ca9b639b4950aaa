use super::CanvasBounds;
use super::nodes::Node;

/// Advance one node by one Euler step (unit time step), then reflect the
/// velocity on every axis whose post-step coordinate left `[0, bound]`.
///
/// Reflection flips velocity only; the overshooting position is kept and
/// the node re-enters on the following step. Clamping the position here
/// would change the visible motion at the edges.
pub(super) fn step_node(node: &mut Node, bounds: CanvasBounds) {
    node.pos += node.vel;

    if node.pos.x < 0.0 || node.pos.x > bounds.width {
        node.vel.x = -node.vel.x;
    }
    if node.pos.y < 0.0 || node.pos.y > bounds.height {
        node.vel.y = -node.vel.y;
    }
}

pub(super) fn step_nodes(nodes: &mut [Node], bounds: CanvasBounds) {
    for node in nodes {
        step_node(node, bounds);
    }
}
