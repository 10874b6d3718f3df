//! Binary classification report (precision, recall, F1, support).

use std::fmt;

/// Scores for one class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class and averaged metrics for the held-out split.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub legitimate: ClassMetrics,
    pub phishing: ClassMetrics,
    pub accuracy: f64,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    /// Builds the report from ground truth and predictions (same length).
    /// Undefined ratios (no predicted or no actual rows) count as 0.
    pub fn from_predictions(actual: &[bool], predicted: &[bool]) -> Self {
        debug_assert_eq!(actual.len(), predicted.len());
        let legitimate = class_metrics(actual, predicted, false);
        let phishing = class_metrics(actual, predicted, true);
        let total = actual.len();
        let correct = actual.iter().zip(predicted).filter(|(a, p)| a == p).count();

        let macro_avg = ClassMetrics {
            precision: (legitimate.precision + phishing.precision) / 2.0,
            recall: (legitimate.recall + phishing.recall) / 2.0,
            f1: (legitimate.f1 + phishing.f1) / 2.0,
            support: total,
        };
        let weight = |m: &ClassMetrics| ratio(m.support, total);
        let weighted = |f: fn(&ClassMetrics) -> f64| {
            f(&legitimate) * weight(&legitimate) + f(&phishing) * weight(&phishing)
        };
        let weighted_avg = ClassMetrics {
            precision: weighted(|m| m.precision),
            recall: weighted(|m| m.recall),
            f1: weighted(|m| m.f1),
            support: total,
        };

        Self {
            legitimate,
            phishing,
            accuracy: ratio(correct, total),
            macro_avg,
            weighted_avg,
        }
    }
}

fn class_metrics(actual: &[bool], predicted: &[bool], class: bool) -> ClassMetrics {
    let mut tp = 0;
    let mut fp = 0;
    let mut fn_ = 0;
    for (&a, &p) in actual.iter().zip(predicted) {
        match (a == class, p == class) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    ClassMetrics {
        precision,
        recall,
        f1,
        support: tp + fn_,
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, name: &str, m: &ClassMetrics) -> fmt::Result {
    writeln!(
        f,
        "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
        name, m.precision, m.recall, m.f1, m.support
    )
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        write_row(f, "legitimate", &self.legitimate)?;
        write_row(f, "phishing", &self.phishing)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        write_row(f, "macro avg", &self.macro_avg)?;
        write_row(f, "weighted avg", &self.weighted_avg)
    }
}
