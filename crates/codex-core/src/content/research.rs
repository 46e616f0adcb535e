//! Research write-ups and their result tables.

/// Dataset selector shared by the bar chart and the pattern table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dataset {
    #[default]
    Malimg,
    Malevis,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Malimg, Dataset::Malevis];

    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Malimg => "Malimg",
            Dataset::Malevis => "Malevis",
        }
    }

    fn index(&self) -> usize {
        match self {
            Dataset::Malimg => 0,
            Dataset::Malevis => 1,
        }
    }
}

/// A model compared in the bar chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarSeries {
    pub name: &'static str,
    pub color: &'static str,
}

/// Accuracy (%) of each series under one attack condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarGroup {
    pub condition: &'static str,
    pub values: [u8; 3],
}

/// Pattern-learning metric; columns are CNN, QNI, H-QNN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternRow {
    pub metric: &'static str,
    values: [[&'static str; 3]; 2],
    /// The QNI column stands out for this metric
    pub highlight_qni: bool,
}

impl PatternRow {
    pub fn values(&self, dataset: Dataset) -> [&'static str; 3] {
        self.values[dataset.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Results {
    pub series: [BarSeries; 3],
    bars: [[BarGroup; 3]; 2],
    pub patterns: &'static [PatternRow],
}

impl Results {
    pub const PATTERN_COLUMNS: [&'static str; 3] = ["CNN", "QNI", "H-QNN"];
    /// Index of the QNI column in [`Self::PATTERN_COLUMNS`]
    pub const QNI_COLUMN: usize = 1;

    pub fn bars(&self, dataset: Dataset) -> &[BarGroup; 3] {
        &self.bars[dataset.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionAnswer {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn qa(question: &'static str, answer: &'static str) -> QuestionAnswer {
    QuestionAnswer { question, answer }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    /// Anchor id, also used by the sticky index
    pub id: &'static str,
    pub index_label: &'static str,
    pub title: &'static str,
    /// Tone modifier for accents (`cyan`, `purple`, `blue`)
    pub accent: &'static str,
    pub image: Option<&'static str>,
    pub lab: Option<&'static str>,
    pub supervisor: Option<&'static str>,
    pub publication: Option<&'static str>,
    pub summary: &'static str,
    pub contributions: &'static [&'static str],
    pub questions: &'static [QuestionAnswer],
    pub additional: &'static [&'static str],
    pub results: Option<Results>,
}

impl Project {
    /// Heading text: the part after `"Project X: "` when present.
    pub fn display_title(&self) -> &'static str {
        match self.title.split_once(": ") {
            Some((_, rest)) => rest,
            None => self.title,
        }
    }

    /// Eyebrow above the heading, e.g. `// PROJECT BETA`.
    pub fn eyebrow(&self) -> String {
        format!("// {}", self.index_label.to_uppercase())
    }
}

const ADDITIONAL: &[&str] = &[
    "Technologies used: Python, PyTorch, Qiskit.",
    "Published in XYZ Conference Proceedings, 2025.",
    "Open-source repository available on GitHub.",
];

const PLACEHOLDER_SUMMARY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation.";

const PLACEHOLDER_QUESTIONS: &[QuestionAnswer] = &[
    qa(
        "Extensive literature review on advanced persistence threats.",
        "We surveyed over 200 papers spanning 2018-2024, cataloguing attack vectors, evasion techniques, and existing detection methodologies. Key themes included fileless malware, living-off-the-land binaries, and supply-chain compromise patterns.",
    ),
    qa(
        "Data collection and preprocessing of 10,000+ malware samples.",
        "Samples were sourced from VirusTotal and MalwareBazaar, covering 15 malware families. Preprocessing steps included static feature extraction (imports, entropy, section metadata), dynamic sandbox traces, and normalization pipelines to ensure consistent input dimensionality across all model architectures.",
    ),
    qa(
        "Architectural design of the detection framework.",
        "The framework adopts a multi-stage pipeline: (1) a feature extractor based on a fine-tuned ResNet backbone, (2) an attention module to highlight discriminative regions, and (3) a lightweight classifier head. The design prioritizes inference speed suitable for real-time endpoint deployment.",
    ),
];

const QSLP_RESULTS: Results = Results {
    series: [
        BarSeries {
            name: "Baseline H-QNN",
            color: "#2252ee",
        },
        BarSeries {
            name: "QNI-CCP",
            color: "#e68bfa",
        },
        BarSeries {
            name: "QSLP",
            color: "#fa608e",
        },
    ],
    bars: [
        [
            BarGroup { condition: "Normal", values: [95, 97, 93] },
            BarGroup { condition: "FGSM", values: [59, 58, 89] },
            BarGroup { condition: "PGD", values: [9, 11, 81] },
        ],
        [
            BarGroup { condition: "Normal", values: [81, 81, 82] },
            BarGroup { condition: "FGSM", values: [38, 11, 75] },
            BarGroup { condition: "PGD", values: [5, 4, 69] },
        ],
    ],
    patterns: &[
        PatternRow {
            metric: "Entropy",
            values: [["2.5300", "2.5215", "2.5452"], ["3.0966", "3.1137", "3.0901"]],
            highlight_qni: false,
        },
        PatternRow {
            metric: "Feature Variance",
            values: [["7.7084", "0.0996", "0.1274"], ["0.3746", "0.0269", "0.0404"]],
            highlight_qni: true,
        },
        PatternRow {
            metric: "High-conf. patterns",
            values: [["78.1%", "99.4%", "73.7%"], ["74.8%", "61.3%", "54.8%"]],
            highlight_qni: false,
        },
    ],
};

pub const PROJECTS: [Project; 3] = [
    Project {
        id: "project-1",
        index_label: "Quantum Machine Learning, Adversarial ML, Deep Learning, Malware classification",
        title: "Project Alpha: Adversarially Robust Quantum-Classical Neural Network for Malware Detection",
        accent: "cyan",
        image: Some("/Images/img1 QML.png"),
        lab: Some("5G usecase lab, IIT Gandhinagar"),
        supervisor: Some("Dr. Sameer G. Kulkarni"),
        publication: Some("Submitted at ACM ASIACCS"),
        summary: "I developed QSLP, a hybrid quantum-classical framework for image-based malware detection designed to improve robustness against evolving and adversarial threats. The model integrates a novel latent-space defense mechanism, QNI-CCP, with a quantum neural layer and adversarial training. By combining latent-space perturbation and pixel-level defense, QSLP enhances generalization and resilience under FGSM and PGD attacks. This work explores practical quantum advantage for secure AI systems in the NISQ era.",
        contributions: &[
            "Designed QSLP, a unified hybrid quantum-classical architecture for robust image-based malware detection.",
            "Proposed QNI-CCP, a novel class-aware latent-space perturbation defense before quantum processing.",
            "Integrated dual-level robustness using latent-space defense and adversarial training (FGSM, PGD).",
            "Performed systematic benchmarking of CNN, QNN, and hybrid models under adversarial settings.",
            "Analyzed trade-offs between quantum expressivity, robustness, and computational overhead in NISQ devices.",
        ],
        questions: &[
            qa(
                "What is Quantum Machine Learning?",
                "Quantum Machine Learning (QML) is an interdisciplinary field that combines quantum computing with machine learning. It leverages quantum phenomena such as superposition and entanglement to potentially speed up learning algorithms. In the NISQ era, QML explores whether small quantum circuits can provide meaningful advantages over classical counterparts for tasks like classification, anomaly detection, and feature extraction.",
            ),
            qa(
                "Why Quantum Machine Learning?",
                "Classical ML models face scalability and robustness challenges as adversarial threats grow in complexity. QML offers a richer, higher-dimensional hypothesis space through quantum feature maps, which may improve model expressivity and resistance to adversarial perturbations. Our research investigates whether this quantum advantage translates to practical security benefits in malware detection.",
            ),
            qa(
                "What is an adversarial attack?",
                "An adversarial attack is a deliberate manipulation of input data, often imperceptible to humans, designed to cause a machine learning model to make a wrong prediction. Common attacks include FGSM (Fast Gradient Sign Method), which adds a small perturbation in the gradient direction, and PGD (Projected Gradient Descent), a stronger iterative variant. In malware detection, adversarial attacks can disguise malicious files as benign ones.",
            ),
            qa(
                "Has anyone previously used Quantum Machine Learning for security?",
                "Prior work has explored QML for tasks like anomaly detection and intrusion detection at a theoretical or simulation level. However, most existing studies do not directly address adversarial robustness in the context of malware classification. Our work is among the first to explicitly benchmark hybrid quantum-classical models under both FGSM and PGD adversarial settings on a real malware image dataset.",
            ),
            qa(
                "How can classical data be converted to quantum data?",
                "Classical data is encoded into a quantum state using a process called amplitude encoding or angle encoding. In angle encoding, each classical feature value is mapped to the rotation angle of a qubit gate (e.g., RX, RY, RZ rotations). Our framework extracts a compact latent vector from a classical CNN and feeds it into a parameterized quantum circuit (PQC) via angle encoding, effectively translating CNN features into qubit rotations.",
            ),
            qa(
                "How did we use the quantum device?",
                "Due to current hardware noise and qubit limitations, we used PennyLane with a statevector simulator for training and validation. The quantum layer was implemented as a parameterized quantum circuit (PQC) composed of rotation gates and entangling CNOT gates. This simulated quantum environment allowed us to benchmark performance reliably before any planned migration to real NISQ hardware.",
            ),
            qa(
                "How many qubits did we use?",
                "We used 6 qubits and 10 qubits based on the datasets. Increasing qubit count exponentially raises simulation cost and introduces more decoherence and gate error on real hardware. We constrained our design to stay within practical NISQ-era limits while still capturing meaningful quantum correlations.",
            ),
            qa(
                "Which datasets were used in this study?",
                "I am currently evaluating QSLP on various datasets. For now results on the Malimg and the Malevis datasets are available. Both datasets are available on the GitHub.",
            ),
        ],
        additional: ADDITIONAL,
        results: Some(QSLP_RESULTS),
    },
    Project {
        id: "project-2",
        index_label: "Project Beta",
        title: "Project Beta: Adversarial Robustness in LLMs",
        accent: "purple",
        image: None,
        lab: None,
        supervisor: None,
        publication: None,
        summary: PLACEHOLDER_SUMMARY,
        contributions: &[
            "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
            "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
            "Extensive literature review on adversarial robustness in large language models.",
        ],
        questions: PLACEHOLDER_QUESTIONS,
        additional: ADDITIONAL,
        results: None,
    },
    Project {
        id: "project-3",
        index_label: "Project Gamma",
        title: "Project Gamma: Federated Security Protocols",
        accent: "blue",
        image: None,
        lab: None,
        supervisor: None,
        publication: None,
        summary: PLACEHOLDER_SUMMARY,
        contributions: &[
            "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
            "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
            "Federated protocol design for distributed security enforcement across heterogeneous nodes.",
        ],
        questions: PLACEHOLDER_QUESTIONS,
        additional: ADDITIONAL,
        results: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_drops_project_prefix() {
        assert_eq!(PROJECTS[1].display_title(), "Adversarial Robustness in LLMs");
    }

    #[test]
    fn eyebrow_is_uppercased() {
        assert_eq!(PROJECTS[2].eyebrow(), "// PROJECT GAMMA");
    }

    #[test]
    fn dataset_switches_bars_and_patterns_together() {
        let results = PROJECTS[0].results.expect("alpha has results");
        assert_eq!(results.bars(Dataset::Malimg)[2].values, [9, 11, 81]);
        assert_eq!(results.bars(Dataset::Malevis)[2].values, [5, 4, 69]);
        let variance = &results.patterns[1];
        assert_eq!(variance.values(Dataset::Malimg)[Results::QNI_COLUMN], "0.0996");
        assert_eq!(variance.values(Dataset::Malevis)[Results::QNI_COLUMN], "0.0269");
    }

    #[test]
    fn default_dataset_is_malimg() {
        assert_eq!(Dataset::default(), Dataset::Malimg);
        assert_eq!(Dataset::ALL.map(|d| d.label()), ["Malimg", "Malevis"]);
    }
}
