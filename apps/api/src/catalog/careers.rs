use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub salary: SalaryRange,
    pub skills: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub track_id: &'static str,
}

/// List view of a career, without the long-form fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub salary: SalaryRange,
}

impl From<&Career> for CareerSummary {
    fn from(career: &Career) -> Self {
        CareerSummary {
            id: career.id,
            title: career.title,
            salary: career.salary.clone(),
        }
    }
}

const USD: &str = "USD";

pub static CAREERS: &[Career] = &[
    Career {
        id: "ml-engineer",
        title: "Machine Learning Engineer",
        description: "Designs, trains and deploys machine learning models into production systems, \
                      owning data pipelines, evaluation and serving infrastructure.",
        salary: SalaryRange {
            min: 120_000,
            max: 200_000,
            currency: USD,
        },
        skills: &[
            "Python",
            "Machine Learning",
            "Deep Learning",
            "Data Structures",
            "System Design",
        ],
        tools: &["PyTorch", "TensorFlow", "scikit-learn", "Docker", "Kubernetes"],
        track_id: "ml-engineering",
    },
    Career {
        id: "data-scientist",
        title: "Data Scientist",
        description: "Turns data into decisions through statistical analysis, experimentation \
                      and predictive modeling, and communicates results to stakeholders.",
        salary: SalaryRange {
            min: 100_000,
            max: 170_000,
            currency: USD,
        },
        skills: &["Statistics", "Python", "SQL", "Experiment Design", "Data Visualization"],
        tools: &["pandas", "Jupyter", "scikit-learn", "Tableau", "Spark"],
        track_id: "data-science",
    },
    Career {
        id: "ai-research-scientist",
        title: "AI Research Scientist",
        description: "Advances the state of the art in machine learning through novel methods, \
                      rigorous experiments and publications.",
        salary: SalaryRange {
            min: 140_000,
            max: 250_000,
            currency: USD,
        },
        skills: &[
            "Linear Algebra",
            "Probability",
            "Deep Learning",
            "Research Methods",
            "Technical Writing",
        ],
        tools: &["PyTorch", "JAX", "LaTeX", "Weights & Biases"],
        track_id: "ai-research",
    },
    Career {
        id: "mlops-engineer",
        title: "MLOps Engineer",
        description: "Builds the platforms that let teams train, ship and monitor models \
                      reliably: CI/CD for models, feature stores and observability.",
        salary: SalaryRange {
            min: 115_000,
            max: 190_000,
            currency: USD,
        },
        skills: &["Cloud Infrastructure", "CI/CD", "Python", "Monitoring", "Containerization"],
        tools: &["Kubernetes", "MLflow", "Airflow", "Terraform", "Prometheus"],
        track_id: "mlops",
    },
    Career {
        id: "nlp-engineer",
        title: "NLP Engineer",
        description: "Builds language understanding and generation systems, from text \
                      classification to retrieval-augmented large language model applications.",
        salary: SalaryRange {
            min: 120_000,
            max: 210_000,
            currency: USD,
        },
        skills: &["Natural Language Processing", "Transformers", "Python", "Information Retrieval"],
        tools: &["Hugging Face", "PyTorch", "spaCy", "Vector Databases"],
        track_id: "nlp",
    },
    Career {
        id: "computer-vision-engineer",
        title: "Computer Vision Engineer",
        description: "Develops models that interpret images and video for detection, \
                      segmentation and tracking, and optimizes them for deployment.",
        salary: SalaryRange {
            min: 115_000,
            max: 195_000,
            currency: USD,
        },
        skills: &["Computer Vision", "Deep Learning", "Image Processing", "C++", "Python"],
        tools: &["OpenCV", "PyTorch", "ONNX", "TensorRT"],
        track_id: "computer-vision",
    },
];

pub fn find_career(id: &str) -> Option<&'static Career> {
    CAREERS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tracks::find_track;

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = CAREERS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CAREERS.len());
    }

    #[test]
    fn test_every_career_has_a_track() {
        for career in CAREERS {
            assert!(
                find_track(career.track_id).is_some(),
                "missing track {} for {}",
                career.track_id,
                career.id
            );
        }
    }

    #[test]
    fn test_salary_ranges_ordered() {
        assert!(CAREERS.iter().all(|c| c.salary.min <= c.salary.max));
    }

    #[test]
    fn test_find_career() {
        assert_eq!(find_career("data-scientist").map(|c| c.title), Some("Data Scientist"));
        assert!(find_career("astronaut").is_none());
    }
}
