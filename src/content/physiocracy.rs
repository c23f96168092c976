//! Physiocracy vocabulary and teacher questions.

/// Words that appear on the bingo cards and in word draws.
pub const VOCABULARY: [&str; 20] = [
    "Agricultura",
    "Terra",
    "Produto líquido",
    "Imposto único",
    "Classe produtiva",
    "Classe estéril",
    "Proprietários",
    "Liberalismo econômico",
    "Laissez-faire",
    "França séc. XVIII",
    "Mercantilismo",
    "Absolutismo",
    "François Quesnay",
    "Quadro econômico",
    "Ordem natural",
    "Comércio",
    "Impostos",
    "Protecionismo",
    "Fonte da riqueza",
    "Renda",
];

/// Prompts the teacher reads aloud; students mark the matching word.
pub const QUESTIONS: [&str; 10] = [
    "Qual teoria defendia que apenas a agricultura é fonte de riqueza?",
    "Quem foi o principal teórico da Fisiocracia?",
    "O que significa 'Laissez-faire, laissez-passer'?",
    "Qual era a única fonte de imposto defendida pelos fisiocratas?",
    "Em que século surgiu a escola fisiocrática?",
    "Qual classe social os fisiocratas consideravam produtiva?",
    "Como os fisiocratas chamavam os comerciantes e artesãos?",
    "Qual obra de Quesnay representa o fluxo da economia?",
    "Que sistema econômico a Fisiocracia criticava?",
    "Qual era a base da 'ordem natural' segundo os fisiocratas?",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_lists_have_no_duplicates() {
        let words: FxHashSet<_> = VOCABULARY.iter().collect();
        assert_eq!(words.len(), VOCABULARY.len());

        let questions: FxHashSet<_> = QUESTIONS.iter().collect();
        assert_eq!(questions.len(), QUESTIONS.len());
    }

    #[test]
    fn test_no_blank_entries() {
        assert!(VOCABULARY.iter().all(|w| !w.trim().is_empty()));
        assert!(QUESTIONS.iter().all(|q| !q.trim().is_empty()));
    }
}
