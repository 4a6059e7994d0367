//! # Vocabulário e Pseudo-Palavras
//!
//! Classifica cada palavra como conhecida, rara ou desconhecida em relação ao
//! vocabulário de treinamento, e mapeia as que se qualificam para um conjunto
//! fixo de categorias de pseudo-palavra baseadas na forma superficial
//! (dígitos, hífens, capitalização, sufixos).
//!
//! ## Por que pseudo-palavras?
//!
//! Palavras raras têm estatísticas de emissão esparsas demais para serem
//! úteis; palavras nunca vistas não têm estatística nenhuma. Substituir ambas
//! por uma categoria de forma ("termina em -mente", "contém dígito e hífen")
//! deixa o modelo aprender estatísticas agregadas que generalizam além da
//! identidade lexical. Com o mapeador ativo, nenhuma palavra é de fato
//! "desconhecida": a regra final sempre casa.
//!
//! ## Regras de Forma
//!
//! Lista ordenada de (padrão, categoria), avaliada de cima para baixo —
//! a primeira regra que casar vence. A última regra é um coringa obrigatório,
//! garantindo que o mapeador nunca deixe de classificar.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::corpus::Sentence;

/// Palavras com frequência de treino abaixo deste corte são consideradas
/// raras e substituídas pela sua categoria de forma durante o treinamento.
pub const RARE_WORD_THRESHOLD: u32 = 5;

/// Categoria coringa: casa com qualquer palavra que escapou das demais regras.
pub const UNKNOWN_CATEGORY: &str = "<UNK>";

/// Um teste de forma: expressão regular ou predicado sobre caracteres.
///
/// Padrões numéricos (datas, decimais, percentuais) ficam naturais como
/// regex; testes de capitalização e sufixo ficam mais claros como funções,
/// já que precisam lidar com maiúsculas acentuadas (É, Á) fora do ASCII.
enum ShapeTest {
    Pattern(Regex),
    Predicate(fn(&str) -> bool),
}

/// Uma regra de forma: categoria atribuída quando o teste casa.
struct ShapeRule {
    category: &'static str,
    test: ShapeTest,
}

impl ShapeRule {
    fn matches(&self, word: &str) -> bool {
        match &self.test {
            ShapeTest::Pattern(re) => re.is_match(word),
            ShapeTest::Predicate(pred) => pred(word),
        }
    }
}

/// Mapeador de vocabulário e pseudo-palavras.
///
/// `fit` aprende o vocabulário (e o conjunto de palavras raras) a partir do
/// treino; `transform` decide, palavra a palavra, entre passagem literal e
/// categoria de forma. Desabilitado, o componente degenera para identidade.
pub struct PseudoWordMapper {
    enabled: bool,
    /// Palavras distintas observadas no treino. Construído apenas no `fit`;
    /// nunca alterado durante a inferência.
    vocab: HashSet<String>,
    /// Palavras do treino com frequência abaixo de [`RARE_WORD_THRESHOLD`].
    rare: HashSet<String>,
    /// Lista ordenada de regras; a última sempre casa.
    rules: Vec<ShapeRule>,
}

impl PseudoWordMapper {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            vocab: HashSet::new(),
            rare: HashSet::new(),
            rules: build_shape_rules(),
        }
    }

    /// Constrói o vocabulário e o conjunto de palavras raras.
    ///
    /// Idempotente por chamada: um segundo `fit` substitui o estado anterior
    /// por completo.
    pub fn fit(&mut self, train: &[Sentence]) {
        let mut freq: HashMap<&str, u32> = HashMap::new();
        for sentence in train {
            for (word, _) in sentence {
                *freq.entry(word.as_str()).or_insert(0) += 1;
            }
        }

        self.vocab = freq.keys().map(|w| w.to_string()).collect();
        self.rare = if self.enabled {
            freq.iter()
                .filter(|(_, &c)| c < RARE_WORD_THRESHOLD)
                .map(|(w, _)| w.to_string())
                .collect()
        } else {
            HashSet::new()
        };
    }

    /// Mapeia uma palavra para ela mesma ou para sua categoria de forma.
    ///
    /// - Desabilitado: identidade.
    /// - Treino: palavras conhecidas e não raras passam inalteradas; raras
    ///   são substituídas pela categoria (o modelo aprende a estatística da
    ///   forma em vez da estatística esparsa do literal).
    /// - Inferência: qualquer palavra ausente do vocabulário é substituída
    ///   pela categoria, caindo no coringa [`UNKNOWN_CATEGORY`] se nenhuma
    ///   regra de forma casar.
    pub fn transform(&self, word: &str, training: bool) -> String {
        if !self.enabled {
            return word.to_string();
        }
        let remap = if training {
            !self.vocab.contains(word) || self.rare.contains(word)
        } else {
            !self.vocab.contains(word)
        };
        if remap {
            self.classify(word).to_string()
        } else {
            word.to_string()
        }
    }

    /// Classifica uma palavra pela primeira regra de forma que casar.
    ///
    /// Total e determinística: a regra coringa garante exatamente uma
    /// categoria para qualquer entrada, inclusive a string vazia.
    pub fn classify(&self, word: &str) -> &'static str {
        self.rules
            .iter()
            .find(|r| r.matches(word))
            .map(|r| r.category)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// A palavra foi observada no treinamento?
    pub fn contains(&self, word: &str) -> bool {
        self.vocab.contains(word)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Monta a lista ordenada de regras de forma.
///
/// A ordem importa: padrões mais específicos (número de dois dígitos,
/// percentual) vêm antes dos genéricos (inicial maiúscula, tudo minúsculo).
fn build_shape_rules() -> Vec<ShapeRule> {
    use ShapeTest::{Pattern, Predicate};

    let re = |p: &str| Regex::new(p).expect("regex de forma inválida");

    vec![
        ShapeRule { category: "<UNK:two_digit_num>", test: Predicate(is_two_digit_num) },
        ShapeRule { category: "<UNK:four_digit_num>", test: Predicate(is_four_digit_num) },
        ShapeRule { category: "<UNK:other_num>", test: Predicate(is_all_digits) },
        ShapeRule { category: "<UNK:percent>", test: Pattern(re(r"^\d+(?:[.,]\d+)?%$")) },
        ShapeRule { category: "<UNK:decimal>", test: Pattern(re(r"^\d+[.,]\d+$")) },
        ShapeRule { category: "<UNK:date>", test: Pattern(re(r"^\d{1,2}/\d{1,2}(?:/\d{2,4})?$")) },
        ShapeRule { category: "<UNK:digit_and_dash>", test: Predicate(has_digit_and_dash) },
        ShapeRule { category: "<UNK:digit_and_alpha>", test: Predicate(has_digit_and_alpha) },
        // Antes de all_caps: "N." tem só uma letra, e ela é maiúscula
        ShapeRule { category: "<UNK:cap_period>", test: Pattern(re(r"^\p{Lu}\.$")) },
        ShapeRule { category: "<UNK:all_caps>", test: Predicate(is_all_caps) },
        ShapeRule { category: "<UNK:hyphenated>", test: Predicate(is_hyphenated) },
        // Inicial maiúscula vence os sufixos: "Ronaldinho" interessa mais
        // como provável nome próprio do que como diminutivo
        ShapeRule { category: "<UNK:init_cap>", test: Predicate(starts_uppercase) },
        ShapeRule { category: "<UNK:suffix_mente>", test: Predicate(|w| w.ends_with("mente")) },
        ShapeRule { category: "<UNK:suffix_cao>", test: Predicate(|w| w.ends_with("ção") || w.ends_with("ções")) },
        ShapeRule { category: "<UNK:suffix_ndo>", test: Predicate(|w| w.ends_with("ndo")) },
        ShapeRule { category: "<UNK:suffix_inho>", test: Predicate(|w| w.ends_with("inho") || w.ends_with("inha")) },
        ShapeRule { category: "<UNK:all_lower>", test: Predicate(is_all_lower) },
        // Coringa obrigatório: garante classificação para qualquer entrada
        ShapeRule { category: UNKNOWN_CATEGORY, test: Predicate(|_| true) },
    ]
}

fn is_all_digits(w: &str) -> bool {
    !w.is_empty() && w.chars().all(|c| c.is_ascii_digit())
}

fn is_two_digit_num(w: &str) -> bool {
    w.len() == 2 && is_all_digits(w)
}

fn is_four_digit_num(w: &str) -> bool {
    w.len() == 4 && is_all_digits(w)
}

fn has_digit_and_dash(w: &str) -> bool {
    w.contains('-') && w.chars().any(|c| c.is_ascii_digit())
}

fn has_digit_and_alpha(w: &str) -> bool {
    w.chars().any(|c| c.is_ascii_digit()) && w.chars().any(|c| c.is_alphabetic())
}

fn is_all_caps(w: &str) -> bool {
    let mut saw_alpha = false;
    for c in w.chars() {
        if c.is_alphabetic() {
            if !c.is_uppercase() {
                return false;
            }
            saw_alpha = true;
        }
    }
    saw_alpha && w.chars().count() > 1
}

fn is_hyphenated(w: &str) -> bool {
    w.contains('-') && w.chars().any(|c| c.is_alphabetic())
}

/// Primeiro grafema começa com maiúscula (cobre acentuadas como "É").
fn starts_uppercase(w: &str) -> bool {
    w.graphemes(true)
        .next()
        .and_then(|g| g.chars().next())
        .map(|c| c.is_uppercase())
        .unwrap_or(false)
}

fn is_all_lower(w: &str) -> bool {
    let mut saw_alpha = false;
    for c in w.chars() {
        if c.is_alphabetic() {
            if !c.is_lowercase() {
                return false;
            }
            saw_alpha = true;
        }
    }
    saw_alpha
}
