//! Sample graph drawn on the centre hero monitor.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Input,
    Hidden,
    Output,
}

impl Layer {
    pub fn color(&self) -> &'static str {
        match self {
            Layer::Input => "#10b981",
            Layer::Hidden => "#3b82f6",
            Layer::Output => "#8b5cf6",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeuralNode {
    pub id: u8,
    pub x: u16,
    pub y: u16,
    pub layer: Layer,
}

const fn node(id: u8, x: u16, y: u16, layer: Layer) -> NeuralNode {
    NeuralNode { id, x, y, layer }
}

/// Laid out on a 120x120 view box.
pub const NEURAL_NODES: [NeuralNode; 9] = [
    node(1, 20, 30, Layer::Input),
    node(2, 20, 60, Layer::Input),
    node(3, 20, 90, Layer::Input),
    node(4, 60, 20, Layer::Hidden),
    node(5, 60, 50, Layer::Hidden),
    node(6, 60, 80, Layer::Hidden),
    node(7, 60, 110, Layer::Hidden),
    node(8, 100, 40, Layer::Output),
    node(9, 100, 80, Layer::Output),
];

pub const NEURAL_EDGES: [(u8, u8); 17] = [
    (1, 4),
    (1, 5),
    (1, 6),
    (2, 4),
    (2, 5),
    (2, 6),
    (2, 7),
    (3, 5),
    (3, 6),
    (3, 7),
    (4, 8),
    (4, 9),
    (5, 8),
    (5, 9),
    (6, 8),
    (6, 9),
    (7, 9),
];

pub const NEURAL_STATS: [(&str, &str); 3] = [
    ("Accuracy", "96.8%"),
    ("Layers", "3"),
    ("Params", "1.2M"),
];

impl NeuralNode {
    pub fn find(id: u8) -> Option<&'static NeuralNode> {
        NEURAL_NODES.iter().find(|n| n.id == id)
    }
}
