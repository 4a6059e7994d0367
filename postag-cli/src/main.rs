//! Driver de comparação dos etiquetadores: baseline, HMM puro, HMM com
//! suavização e HMM com suavização + pseudo-palavras, sobre a mesma partição
//! do corpus. Imprime as três taxas de erro de cada estágio e grava a matriz
//! de confusão do melhor modelo em arquivo.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use postag_core::corpus::{train_test_split, CorpusProvider, EmbeddedCorpus, Tag};
use postag_core::{add_one_smoothing, flatten_pairs, BaselineTagger, HmmTagger, LossReport};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "postag", about = "Comparação de etiquetadores POS sobre o corpus embutido")]
struct Args {
    /// Restringe o corpus a um domínio temático (ex.: "saúde", "esportes")
    #[arg(long)]
    domain: Option<String>,

    /// Razão da partição treino/teste (corte por prefixo, sem embaralhar)
    #[arg(long, default_value_t = 0.9)]
    split_ratio: f64,

    /// Arquivo de saída da matriz de confusão do último estágio
    #[arg(long, default_value = "conf.txt")]
    confusion_out: PathBuf,

    /// Emite as métricas consolidadas em JSON no stdout
    #[arg(long)]
    json: bool,
}

/// Métricas de um estágio, para o relatório JSON.
#[derive(Serialize)]
struct StageMetrics {
    stage: &'static str,
    known_error_rate: f64,
    unknown_error_rate: f64,
    total_error_rate: f64,
}

impl StageMetrics {
    fn new(stage: &'static str, report: &LossReport) -> Self {
        Self {
            stage,
            known_error_rate: report.known_error_rate(),
            unknown_error_rate: report.unknown_error_rate(),
            total_error_rate: report.total_error_rate(),
        }
    }
}

fn banner(title: &str) {
    println!("{:=^40}", format!(" {title} "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let args = Args::parse();

    let sentences = EmbeddedCorpus.tagged_sents(args.domain.as_deref());
    let (train, test) = train_test_split(&sentences, args.split_ratio);
    info!(
        dominio = args.domain.as_deref().unwrap_or("todos"),
        treino = train.len(),
        teste = test.len(),
        "corpus particionado"
    );

    let mut metrics = Vec::new();

    banner("BASELINE");
    let mut baseline = BaselineTagger::new();
    baseline.train(&train, &test)?;
    let report = baseline.loss(&test, None)?;
    println!("{report}");
    metrics.push(StageMetrics::new("baseline", &report));

    banner("HMM");
    let mut hmm = HmmTagger::new();
    hmm.train(&train, &test)?;
    let report = hmm.loss(&test, None)?;
    println!("{report}");
    metrics.push(StageMetrics::new("hmm", &report));

    banner("HMM + suavização");
    let mut smoothed = HmmTagger::with_smoothing(add_one_smoothing);
    smoothed.train(&train, &test)?;
    let report = smoothed.loss(&test, None)?;
    println!("{report}");
    metrics.push(StageMetrics::new("hmm_add1", &report));

    banner("HMM + suavização + pseudo-palavras");
    let mut full = HmmTagger::with_options(add_one_smoothing, true);
    full.train(&train, &test)?;
    let predictions = full.predict(&test)?;

    let pairs = flatten_pairs(&test, &predictions);
    let matrix = ConfusionMatrix::from_pairs(&pairs);
    fs::write(&args.confusion_out, matrix.pretty_format())?;
    info!(arquivo = %args.confusion_out.display(), "matriz de confusão gravada");

    let report = full.loss(&test, Some(&predictions))?;
    println!("{report}");
    metrics.push(StageMetrics::new("hmm_add1_pseudo", &report));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    }

    Ok(())
}

/// Matriz de confusão gabarito × predição, montada a partir dos pares
/// achatados que o núcleo expõe.
struct ConfusionMatrix {
    /// Rótulos ordenados por frequência no gabarito (mais comum primeiro).
    labels: Vec<Tag>,
    /// (gabarito, predição) → contagem.
    counts: HashMap<(Tag, Tag), usize>,
}

impl ConfusionMatrix {
    fn from_pairs(pairs: &[(Tag, Tag)]) -> Self {
        let mut counts: HashMap<(Tag, Tag), usize> = HashMap::new();
        let mut gold_freq: HashMap<Tag, usize> = HashMap::new();
        let mut seen: Vec<Tag> = Vec::new();

        for (gold, pred) in pairs {
            *counts.entry((gold.clone(), pred.clone())).or_insert(0) += 1;
            *gold_freq.entry(gold.clone()).or_insert(0) += 1;
            for label in [gold, pred] {
                if !seen.contains(label) {
                    seen.push(label.clone());
                }
            }
        }

        // Mais frequente no gabarito primeiro; empate por ordem alfabética
        seen.sort_by(|a, b| {
            let fa = gold_freq.get(a).unwrap_or(&0);
            let fb = gold_freq.get(b).unwrap_or(&0);
            fb.cmp(fa).then_with(|| a.cmp(b))
        });

        Self { labels: seen, counts }
    }

    /// Renderiza a matriz em texto alinhado por colunas. Linhas são o
    /// gabarito, colunas a predição; a diagonal são os acertos.
    fn pretty_format(&self) -> String {
        let label_width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(1)
            .max(4);
        let cell_width = self
            .counts
            .values()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1)
            .max(label_width);

        let mut out = String::new();
        out.push_str(&format!("{:>label_width$} |", ""));
        for label in &self.labels {
            out.push_str(&format!(" {label:>cell_width$}"));
        }
        out.push('\n');

        let line_width = label_width + 2 + (cell_width + 1) * self.labels.len();
        out.push_str(&"-".repeat(line_width));
        out.push('\n');

        for gold in &self.labels {
            out.push_str(&format!("{gold:>label_width$} |"));
            for pred in &self.labels {
                let c = self
                    .counts
                    .get(&(gold.clone(), pred.clone()))
                    .copied()
                    .unwrap_or(0);
                if c == 0 {
                    out.push_str(&format!(" {:>cell_width$}", "."));
                } else {
                    out.push_str(&format!(" {c:>cell_width$}"));
                }
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<(Tag, Tag)> {
        vec![
            ("N".into(), "N".into()),
            ("N".into(), "V".into()),
            ("N".into(), "N".into()),
            ("V".into(), "V".into()),
        ]
    }

    #[test]
    fn test_labels_sorted_by_gold_frequency() {
        let matrix = ConfusionMatrix::from_pairs(&pairs());
        assert_eq!(matrix.labels, vec!["N".to_string(), "V".to_string()]);
    }

    #[test]
    fn test_counts_accumulate() {
        let matrix = ConfusionMatrix::from_pairs(&pairs());
        assert_eq!(matrix.counts[&("N".into(), "N".into())], 2);
        assert_eq!(matrix.counts[&("N".into(), "V".into())], 1);
        assert_eq!(matrix.counts[&("V".into(), "V".into())], 1);
    }

    #[test]
    fn test_pretty_format_has_all_rows() {
        let matrix = ConfusionMatrix::from_pairs(&pairs());
        let text = matrix.pretty_format();
        // Cabeçalho + separador + uma linha por rótulo
        assert_eq!(text.lines().count(), 2 + matrix.labels.len());
        assert!(text.contains('N'));
        assert!(text.contains('V'));
    }

    #[test]
    fn test_stage_metrics_shape() {
        let report = LossReport {
            known_errors: 1,
            known_total: 4,
            unknown_errors: 1,
            unknown_total: 2,
        };
        let metrics = StageMetrics::new("baseline", &report);
        assert!((metrics.known_error_rate - 0.25).abs() < 1e-12);
        assert!((metrics.unknown_error_rate - 0.5).abs() < 1e-12);
        assert!((metrics.total_error_rate - 2.0 / 6.0).abs() < 1e-12);
    }
}
