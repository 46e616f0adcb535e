/// Whether a timeline entry is finished or ongoing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceStatus {
    Completed,
    Active,
}

impl ExperienceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceStatus::Completed => "COMPLETED",
            ExperienceStatus::Active => "ACTIVE",
        }
    }
}

/// One card on the experience circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub role: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    pub status: ExperienceStatus,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub const RESEARCH_UPTIME: &str = "Research Experience: 12 months and counting";

pub const EXPERIENCES: [Experience; 5] = [
    Experience {
        title: "Forensic Knight",
        role: "Digital Forensics Intern",
        subtitle: "The Awakening",
        date: "2023",
        status: ExperienceStatus::Completed,
        description: "Began my journey into cybersecurity, analyzing digital evidence and understanding attack vectors.",
        details: &[
            "Executed forensic investigations using Kali Linux artifact analysis.",
            "Analyzed malware behavior and file obfuscation techniques",
            "Learned MITRE ATT&CK and NIST frameworks for structured threat classification",
        ],
    },
    Experience {
        title: "LLM Researcher at PDEU",
        role: "Research on LLM Security",
        subtitle: "The Training",
        date: "2024",
        status: ExperienceStatus::Completed,
        description: "Dove deep into Large Language Model vulnerabilities, exploring prompt injection attacks and defensive strategies.",
        details: &[
            "Researched prompt injection vulnerabilities in LLMs",
            "Analyzed advanced defense strategies.",
            "Learned scientific writing and gap identification, translating findings into actionable security insights.",
        ],
    },
    Experience {
        title: "Research Intern at IIT Gandhinagar",
        role: "Research Intern",
        subtitle: "The Proving Ground",
        date: "Summer 2024",
        status: ExperienceStatus::Completed,
        description: "Advanced research internship focusing on AI safety protocols and quantum-resistant cryptography.",
        details: &[
            "Developed the \"QNI-CCP\" hybrid Classical-Quantum framework for robust malware detection.",
            "Achieved 97% accuracy on a large-scale dataset.",
            "Evaluated models under adversarial conditions.",
        ],
    },
    Experience {
        title: "AI Researcher at PDEU",
        role: "Independent Researcher",
        subtitle: "The Expansion",
        date: "2024-2025",
        status: ExperienceStatus::Completed,
        description: "Expanded research scope to include broader AI alignment challenges and ML security frameworks.",
        details: &[
            "Developed \"LODO\" framework to sanitize malicious prompts.",
            "Engineered a detection pipeline using Sentence-BERT and XGBoost, achieving 96% accuracy.",
            "Extension work of Prompt Injection research.",
        ],
    },
    Experience {
        title: "Research Intern at IIT Gandhinagar (Current)",
        role: "Advanced Research Intern",
        subtitle: "The Deployment",
        date: "2025-Present",
        status: ExperienceStatus::Active,
        description: "Currently engineering production-ready AI security solutions bridging theory with practice.",
        details: &[
            "Proposed the novel QSLP framework for advanced malware classification.",
            "Validated framework performance and robustness on the Malevis dataset.",
            "Authored and submitted findings to a top ACM conference.",
        ],
    },
];
