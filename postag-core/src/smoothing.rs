//! # Estratégias de Suavização (Smoothing)
//!
//! Converte contagens brutas em estimativas de probabilidade. A estratégia é
//! um ponto de injeção: um valor de função escolhido no momento do
//! treinamento e aplicado uniformemente às estimativas inicial, de transição
//! e de emissão. O decodificador não sabe qual estratégia foi usada.
//!
//! ## Por que suavizar?
//!
//! A estimativa de máxima verossimilhança (MLE) atribui probabilidade zero a
//! qualquer evento não observado no treino. No Viterbi, um único zero anula
//! a pontuação da sentença inteira — é exatamente isso que produz as taxas
//! de erro catastróficas do HMM sem suavização para palavras desconhecidas.
//! O *Add-1* (Laplace) finge ter visto cada evento possível uma vez a mais:
//!
//! $$ P(x) = \frac{c(x) + 1}{N + V} $$
//!
//! garantindo que toda probabilidade seja estritamente positiva.

/// Uma estratégia de suavização: `(contagem, total_condicionante,
/// tamanho_do_alfabeto) -> probabilidade`.
///
/// Estratégias alternativas (add-k, Good-Turing) podem ser substituídas sem
/// alterar o decodificador, desde que respeitem esta assinatura.
pub type SmoothingFn = fn(count: f64, total: f64, alphabet: f64) -> f64;

/// Sem suavização: estimativa de máxima verossimilhança `c / N`.
///
/// Contagens zero produzem probabilidade zero (e, portanto, `-inf` em
/// log-space). Com total zero a estimativa é definida como zero.
pub fn no_smoothing(count: f64, total: f64, _alphabet: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        count / total
    }
}

/// Suavização Add-1 (Laplace): `(c + 1) / (N + V)`.
///
/// Estritamente positiva para qualquer contagem, inclusive zero.
pub fn add_one_smoothing(count: f64, total: f64, alphabet: f64) -> f64 {
    (count + 1.0) / (total + alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_smoothing_is_mle() {
        assert_eq!(no_smoothing(3.0, 10.0, 42.0), 0.3);
        assert_eq!(no_smoothing(0.0, 10.0, 42.0), 0.0);
        assert_eq!(no_smoothing(0.0, 0.0, 42.0), 0.0);
    }

    #[test]
    fn test_add_one_formula() {
        // (2 + 1) / (8 + 4) = 0.25
        assert!((add_one_smoothing(2.0, 8.0, 4.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_add_one_never_zero() {
        let p = add_one_smoothing(0.0, 1000.0, 5000.0);
        assert!(p > 0.0);
    }

    #[test]
    fn test_add_one_sums_to_one_over_alphabet() {
        // Com contagens {3, 1, 0, 0} sobre alfabeto de 4 símbolos e N=4,
        // a soma das estimativas deve ser exatamente 1.
        let counts = [3.0, 1.0, 0.0, 0.0];
        let total: f64 = counts.iter().sum();
        let sum: f64 = counts
            .iter()
            .map(|&c| add_one_smoothing(c, total, counts.len() as f64))
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
