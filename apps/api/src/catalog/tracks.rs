use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackModule {
    pub title: &'static str,
    pub duration_weeks: u8,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningTrack {
    pub id: &'static str,
    pub title: &'static str,
    pub career_id: &'static str,
    /// In the order they should be studied.
    pub modules: &'static [TrackModule],
}

impl LearningTrack {
    pub fn total_weeks(&self) -> u32 {
        self.modules.iter().map(|m| u32::from(m.duration_weeks)).sum()
    }
}

pub static TRACKS: &[LearningTrack] = &[
    LearningTrack {
        id: "ml-engineering",
        title: "Machine Learning Engineering",
        career_id: "ml-engineer",
        modules: &[
            TrackModule {
                title: "Python & Data Foundations",
                duration_weeks: 3,
                topics: &["NumPy", "pandas", "Data cleaning"],
            },
            TrackModule {
                title: "Core Machine Learning",
                duration_weeks: 4,
                topics: &["Regression", "Trees & ensembles", "Model evaluation"],
            },
            TrackModule {
                title: "Deep Learning",
                duration_weeks: 4,
                topics: &["Neural networks", "CNNs", "Transformers"],
            },
            TrackModule {
                title: "Production ML",
                duration_weeks: 3,
                topics: &["Model serving", "Monitoring", "Feature pipelines"],
            },
        ],
    },
    LearningTrack {
        id: "data-science",
        title: "Data Science",
        career_id: "data-scientist",
        modules: &[
            TrackModule {
                title: "Statistics & Probability",
                duration_weeks: 3,
                topics: &["Distributions", "Hypothesis testing", "Bayesian basics"],
            },
            TrackModule {
                title: "SQL & Data Wrangling",
                duration_weeks: 2,
                topics: &["Joins", "Window functions", "pandas"],
            },
            TrackModule {
                title: "Predictive Modeling",
                duration_weeks: 4,
                topics: &["Supervised learning", "Feature engineering", "Cross-validation"],
            },
            TrackModule {
                title: "Experimentation & Storytelling",
                duration_weeks: 2,
                topics: &["A/B testing", "Dashboards", "Presenting results"],
            },
        ],
    },
    LearningTrack {
        id: "ai-research",
        title: "AI Research",
        career_id: "ai-research-scientist",
        modules: &[
            TrackModule {
                title: "Mathematical Foundations",
                duration_weeks: 4,
                topics: &["Linear algebra", "Optimization", "Information theory"],
            },
            TrackModule {
                title: "Modern Deep Learning",
                duration_weeks: 4,
                topics: &["Attention", "Generative models", "Scaling laws"],
            },
            TrackModule {
                title: "Research Practice",
                duration_weeks: 3,
                topics: &["Reading papers", "Reproducing results", "Writing papers"],
            },
        ],
    },
    LearningTrack {
        id: "mlops",
        title: "MLOps",
        career_id: "mlops-engineer",
        modules: &[
            TrackModule {
                title: "Containers & Orchestration",
                duration_weeks: 3,
                topics: &["Docker", "Kubernetes", "Helm"],
            },
            TrackModule {
                title: "ML Pipelines",
                duration_weeks: 3,
                topics: &["Airflow", "Experiment tracking", "Model registry"],
            },
            TrackModule {
                title: "Observability",
                duration_weeks: 2,
                topics: &["Drift detection", "Metrics", "Alerting"],
            },
        ],
    },
    LearningTrack {
        id: "nlp",
        title: "Natural Language Processing",
        career_id: "nlp-engineer",
        modules: &[
            TrackModule {
                title: "Text Processing",
                duration_weeks: 2,
                topics: &["Tokenization", "Embeddings", "Classical NLP"],
            },
            TrackModule {
                title: "Transformers",
                duration_weeks: 4,
                topics: &["Attention", "Fine-tuning", "Evaluation"],
            },
            TrackModule {
                title: "LLM Applications",
                duration_weeks: 3,
                topics: &["Prompting", "Retrieval augmentation", "Guardrails"],
            },
        ],
    },
    LearningTrack {
        id: "computer-vision",
        title: "Computer Vision",
        career_id: "computer-vision-engineer",
        modules: &[
            TrackModule {
                title: "Image Fundamentals",
                duration_weeks: 2,
                topics: &["Filtering", "Color spaces", "OpenCV"],
            },
            TrackModule {
                title: "Vision Models",
                duration_weeks: 4,
                topics: &["CNNs", "Detection", "Segmentation"],
            },
            TrackModule {
                title: "Edge Deployment",
                duration_weeks: 2,
                topics: &["Quantization", "ONNX", "TensorRT"],
            },
        ],
    },
];

pub fn find_track(id: &str) -> Option<&'static LearningTrack> {
    TRACKS.iter().find(|t| t.id == id)
}
