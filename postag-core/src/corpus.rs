//! # Corpus em Português Brasileiro com Anotações Morfossintáticas
//!
//! Corpus de texto anotado manualmente cobrindo domínios temáticos do Brasil.
//! Cada sentença está anotada token a token com a classe gramatical (POS),
//! para treinamento e avaliação dos etiquetadores.
//!
//! ## Tagset
//!
//! Conjunto fechado de 13 etiquetas, inspirado no Mac-Morpho:
//!
//! | Tag   | Significado              | Exemplos                       |
//! |-------|--------------------------|--------------------------------|
//! | ART   | Artigo                   | o, a, os, um, uma              |
//! | N     | Substantivo comum        | vacina, jogador, cidade        |
//! | NPROP | Nome próprio             | Fiocruz, São, Paulo            |
//! | ADJ   | Adjetivo                 | novo, brasileira, importante   |
//! | V     | Verbo                    | venceu, é, anunciou            |
//! | PCP   | Particípio               | considerado, enforcado         |
//! | ADV   | Advérbio                 | ontem, rapidamente, não        |
//! | PREP  | Preposição (e contração) | de, em, do, na, pela           |
//! | KC    | Conjunção coordenativa   | e, mas, ou                     |
//! | KS    | Conjunção subordinativa  | que, quando, se                |
//! | PRO   | Pronome                  | se, seu, todos                 |
//! | NUM   | Numeral                  | 2023, 50, três, 10,5%          |
//! | PU    | Pontuação                | . , ;                          |
//!
//! ## Domínios Cobertos
//! - Saúde e medicina
//! - Esportes
//! - Economia e negócios
//! - História do Brasil
//! - Ciência e tecnologia
//! - Cultura e entretenimento
//! - Meio ambiente
//! - Educação
//! - Política

/// Uma palavra observada (token opaco).
pub type Word = String;

/// Uma etiqueta morfossintática do tagset fechado.
pub type Tag = String;

/// Uma sentença de treinamento/teste: sequência ordenada de pares (palavra, tag).
///
/// A ordem é semanticamente significativa — é ela que o HMM modela.
/// O par tipado garante, por construção, que toda palavra tem exatamente
/// uma tag (não existe "desalinhamento" representável).
pub type Sentence = Vec<(Word, Tag)>;

/// Todas as etiquetas do tagset, em ordem alfabética.
pub const TAGSET: &[&str] = &[
    "ADJ", "ADV", "ART", "KC", "KS", "N", "NPROP", "NUM", "PCP", "PREP", "PRO", "PU", "V",
];

/// Uma sentença anotada com classes gramaticais
///
/// Cada token carrega sua etiqueta POS. Diferente de esquemas de spans
/// (como BIO para NER), aqui a anotação é uma classificação por token,
/// sem estrutura de entidade.
pub struct TaggedSentence {
    /// O texto completo da sentença.
    pub text: &'static str,
    /// Domínio temático (utilizado como seletor de categoria do corpus).
    pub domain: &'static str,
    /// Pares (palavra, tag_POS).
    /// Exemplo: `[("A", "ART"), ("Fiocruz", "NPROP"), ("desenvolveu", "V")]`
    pub tokens: &'static [(&'static str, &'static str)],
}

impl TaggedSentence {
    /// Converte a anotação estática em uma [`Sentence`] de strings possuídas.
    pub fn to_sentence(&self) -> Sentence {
        self.tokens
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect()
    }
}

/// Fonte de sentenças anotadas.
///
/// O acesso ao corpus é injetado via construtor nos chamadores (e não lido
/// de estado global), de modo que o núcleo estatístico possa ser testado
/// com corpora sintéticos.
pub trait CorpusProvider {
    /// Retorna as sentenças anotadas, opcionalmente filtradas por domínio.
    ///
    /// A ordem original do corpus é preservada — isso importa porque a
    /// partição treino/teste é um corte por prefixo/sufixo.
    fn tagged_sents(&self, domain: Option<&str>) -> Vec<Sentence>;
}

/// Provedor padrão sobre o corpus embutido em PT-BR.
pub struct EmbeddedCorpus;

impl CorpusProvider for EmbeddedCorpus {
    fn tagged_sents(&self, domain: Option<&str>) -> Vec<Sentence> {
        get_corpus()
            .iter()
            .filter(|s| domain.map(|d| s.domain == d).unwrap_or(true))
            .map(|s| s.to_sentence())
            .collect()
    }
}

/// Particiona as sentenças em (treino, teste) pela razão dada.
///
/// O corte é determinístico: `round(len * ratio)` primeiras sentenças para
/// treino, o restante para teste, sem embaralhamento. A mesma razão sobre o
/// mesmo corpus produz sempre a mesma partição.
pub fn train_test_split(sentences: &[Sentence], ratio: f64) -> (Vec<Sentence>, Vec<Sentence>) {
    let split = (sentences.len() as f64 * ratio).round() as usize;
    let split = split.min(sentences.len());
    (sentences[..split].to_vec(), sentences[split..].to_vec())
}

/// Retorna o corpus completo em PT-BR
pub fn get_corpus() -> Vec<TaggedSentence> {
    vec![
        // ===== SAÚDE =====
        TaggedSentence {
            text: "A Fiocruz desenvolveu uma vacina contra a dengue em 2023.",
            domain: "saúde",
            tokens: &[
                ("A", "ART"), ("Fiocruz", "NPROP"), ("desenvolveu", "V"), ("uma", "ART"),
                ("vacina", "N"), ("contra", "PREP"), ("a", "ART"), ("dengue", "N"),
                ("em", "PREP"), ("2023", "NUM"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O hospital de São Paulo é referência em cardiologia.",
            domain: "saúde",
            tokens: &[
                ("O", "ART"), ("hospital", "N"), ("de", "PREP"), ("São", "NPROP"),
                ("Paulo", "NPROP"), ("é", "V"), ("referência", "N"), ("em", "PREP"),
                ("cardiologia", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A pesquisadora publicou ontem um estudo importante sobre a pandemia.",
            domain: "saúde",
            tokens: &[
                ("A", "ART"), ("pesquisadora", "N"), ("publicou", "V"), ("ontem", "ADV"),
                ("um", "ART"), ("estudo", "N"), ("importante", "ADJ"), ("sobre", "PREP"),
                ("a", "ART"), ("pandemia", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O Instituto Butantan produz milhões de doses de vacinas para o país.",
            domain: "saúde",
            tokens: &[
                ("O", "ART"), ("Instituto", "NPROP"), ("Butantan", "NPROP"), ("produz", "V"),
                ("milhões", "N"), ("de", "PREP"), ("doses", "N"), ("de", "PREP"),
                ("vacinas", "N"), ("para", "PREP"), ("o", "ART"), ("país", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O médico recomendou repouso absoluto e muita água.",
            domain: "saúde",
            tokens: &[
                ("O", "ART"), ("médico", "N"), ("recomendou", "V"), ("repouso", "N"),
                ("absoluto", "ADJ"), ("e", "KC"), ("muita", "PRO"), ("água", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A Anvisa aprovou rapidamente o novo tratamento contra a gripe.",
            domain: "saúde",
            tokens: &[
                ("A", "ART"), ("Anvisa", "NPROP"), ("aprovou", "V"), ("rapidamente", "ADV"),
                ("o", "ART"), ("novo", "ADJ"), ("tratamento", "N"), ("contra", "PREP"),
                ("a", "ART"), ("gripe", "N"), (".", "PU"),
            ],
        },

        // ===== ESPORTES =====
        TaggedSentence {
            text: "O Flamengo venceu o Fluminense por 3 a 1 no Maracanã.",
            domain: "esportes",
            tokens: &[
                ("O", "ART"), ("Flamengo", "NPROP"), ("venceu", "V"), ("o", "ART"),
                ("Fluminense", "NPROP"), ("por", "PREP"), ("3", "NUM"), ("a", "PREP"),
                ("1", "NUM"), ("no", "PREP"), ("Maracanã", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Pelé é considerado o maior jogador de todos os tempos.",
            domain: "esportes",
            tokens: &[
                ("Pelé", "NPROP"), ("é", "V"), ("considerado", "PCP"), ("o", "ART"),
                ("maior", "ADJ"), ("jogador", "N"), ("de", "PREP"), ("todos", "PRO"),
                ("os", "ART"), ("tempos", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A seleção brasileira conquistou a medalha de ouro em Paris.",
            domain: "esportes",
            tokens: &[
                ("A", "ART"), ("seleção", "N"), ("brasileira", "ADJ"), ("conquistou", "V"),
                ("a", "ART"), ("medalha", "N"), ("de", "PREP"), ("ouro", "N"),
                ("em", "PREP"), ("Paris", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Ayrton Senna foi tricampeão mundial de Fórmula 1.",
            domain: "esportes",
            tokens: &[
                ("Ayrton", "NPROP"), ("Senna", "NPROP"), ("foi", "V"), ("tricampeão", "N"),
                ("mundial", "ADJ"), ("de", "PREP"), ("Fórmula", "NPROP"), ("1", "NUM"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O técnico declarou que o time jogou muito bem.",
            domain: "esportes",
            tokens: &[
                ("O", "ART"), ("técnico", "N"), ("declarou", "V"), ("que", "KS"),
                ("o", "ART"), ("time", "N"), ("jogou", "V"), ("muito", "ADV"),
                ("bem", "ADV"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A torcida comemorou a vitória histórica no estádio lotado.",
            domain: "esportes",
            tokens: &[
                ("A", "ART"), ("torcida", "N"), ("comemorou", "V"), ("a", "ART"),
                ("vitória", "N"), ("histórica", "ADJ"), ("no", "PREP"), ("estádio", "N"),
                ("lotado", "ADJ"), (".", "PU"),
            ],
        },

        // ===== ECONOMIA =====
        TaggedSentence {
            text: "A Petrobras anunciou lucro recorde de 50 bilhões de reais.",
            domain: "economia",
            tokens: &[
                ("A", "ART"), ("Petrobras", "NPROP"), ("anunciou", "V"), ("lucro", "N"),
                ("recorde", "ADJ"), ("de", "PREP"), ("50", "NUM"), ("bilhões", "N"),
                ("de", "PREP"), ("reais", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O Banco Central manteve a taxa Selic em 10,5% ao ano.",
            domain: "economia",
            tokens: &[
                ("O", "ART"), ("Banco", "NPROP"), ("Central", "NPROP"), ("manteve", "V"),
                ("a", "ART"), ("taxa", "N"), ("Selic", "NPROP"), ("em", "PREP"),
                ("10,5%", "NUM"), ("ao", "PREP"), ("ano", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A Vale é a maior mineradora do Brasil e uma das maiores do mundo.",
            domain: "economia",
            tokens: &[
                ("A", "ART"), ("Vale", "NPROP"), ("é", "V"), ("a", "ART"),
                ("maior", "ADJ"), ("mineradora", "N"), ("do", "PREP"), ("Brasil", "NPROP"),
                ("e", "KC"), ("uma", "ART"), ("das", "PREP"), ("maiores", "ADJ"),
                ("do", "PREP"), ("mundo", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A Embraer assinou um contrato importante com a Boeing.",
            domain: "economia",
            tokens: &[
                ("A", "ART"), ("Embraer", "NPROP"), ("assinou", "V"), ("um", "ART"),
                ("contrato", "N"), ("importante", "ADJ"), ("com", "PREP"), ("a", "ART"),
                ("Boeing", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O mercado reagiu mal quando o governo anunciou o novo imposto.",
            domain: "economia",
            tokens: &[
                ("O", "ART"), ("mercado", "N"), ("reagiu", "V"), ("mal", "ADV"),
                ("quando", "KS"), ("o", "ART"), ("governo", "N"), ("anunciou", "V"),
                ("o", "ART"), ("novo", "ADJ"), ("imposto", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A inflação caiu pela segunda vez neste ano, segundo o IBGE.",
            domain: "economia",
            tokens: &[
                ("A", "ART"), ("inflação", "N"), ("caiu", "V"), ("pela", "PREP"),
                ("segunda", "ADJ"), ("vez", "N"), ("neste", "PREP"), ("ano", "N"),
                (",", "PU"), ("segundo", "PREP"), ("o", "ART"), ("IBGE", "NPROP"), (".", "PU"),
            ],
        },

        // ===== HISTÓRIA =====
        TaggedSentence {
            text: "Dom Pedro proclamou a Independência do Brasil em 1822.",
            domain: "história",
            tokens: &[
                ("Dom", "NPROP"), ("Pedro", "NPROP"), ("proclamou", "V"), ("a", "ART"),
                ("Independência", "NPROP"), ("do", "PREP"), ("Brasil", "NPROP"),
                ("em", "PREP"), ("1822", "NUM"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Tiradentes foi enforcado no Rio de Janeiro em 1792.",
            domain: "história",
            tokens: &[
                ("Tiradentes", "NPROP"), ("foi", "V"), ("enforcado", "PCP"), ("no", "PREP"),
                ("Rio", "NPROP"), ("de", "PREP"), ("Janeiro", "NPROP"), ("em", "PREP"),
                ("1792", "NUM"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Getúlio Vargas governou o país em dois períodos distintos.",
            domain: "história",
            tokens: &[
                ("Getúlio", "NPROP"), ("Vargas", "NPROP"), ("governou", "V"), ("o", "ART"),
                ("país", "N"), ("em", "PREP"), ("dois", "NUM"), ("períodos", "N"),
                ("distintos", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A princesa assinou a lei que aboliu a escravidão no Brasil.",
            domain: "história",
            tokens: &[
                ("A", "ART"), ("princesa", "N"), ("assinou", "V"), ("a", "ART"),
                ("lei", "N"), ("que", "KS"), ("aboliu", "V"), ("a", "ART"),
                ("escravidão", "N"), ("no", "PREP"), ("Brasil", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Santos Dumont realizou o primeiro voo reconhecido da história em Paris.",
            domain: "história",
            tokens: &[
                ("Santos", "NPROP"), ("Dumont", "NPROP"), ("realizou", "V"), ("o", "ART"),
                ("primeiro", "ADJ"), ("voo", "N"), ("reconhecido", "PCP"), ("da", "PREP"),
                ("história", "N"), ("em", "PREP"), ("Paris", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A Semana de Arte Moderna marcou o início do modernismo brasileiro.",
            domain: "história",
            tokens: &[
                ("A", "ART"), ("Semana", "NPROP"), ("de", "PREP"), ("Arte", "NPROP"),
                ("Moderna", "NPROP"), ("marcou", "V"), ("o", "ART"), ("início", "N"),
                ("do", "PREP"), ("modernismo", "N"), ("brasileiro", "ADJ"), (".", "PU"),
            ],
        },

        // ===== TECNOLOGIA =====
        TaggedSentence {
            text: "O Nubank se tornou o maior banco digital do mundo.",
            domain: "tecnologia",
            tokens: &[
                ("O", "ART"), ("Nubank", "NPROP"), ("se", "PRO"), ("tornou", "V"),
                ("o", "ART"), ("maior", "ADJ"), ("banco", "N"), ("digital", "ADJ"),
                ("do", "PREP"), ("mundo", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O instituto lançou o satélite Amazônia-1 em órbita no ano passado.",
            domain: "tecnologia",
            tokens: &[
                ("O", "ART"), ("instituto", "N"), ("lançou", "V"), ("o", "ART"),
                ("satélite", "N"), ("Amazônia-1", "NPROP"), ("em", "PREP"), ("órbita", "N"),
                ("no", "PREP"), ("ano", "N"), ("passado", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A universidade desenvolve pesquisas avançadas em inteligência artificial.",
            domain: "tecnologia",
            tokens: &[
                ("A", "ART"), ("universidade", "N"), ("desenvolve", "V"), ("pesquisas", "N"),
                ("avançadas", "ADJ"), ("em", "PREP"), ("inteligência", "N"),
                ("artificial", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os engenheiros testaram o sistema durante três meses seguidos.",
            domain: "tecnologia",
            tokens: &[
                ("Os", "ART"), ("engenheiros", "N"), ("testaram", "V"), ("o", "ART"),
                ("sistema", "N"), ("durante", "PREP"), ("três", "NUM"), ("meses", "N"),
                ("seguidos", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A startup brasileira recebeu um investimento de 200 milhões de dólares.",
            domain: "tecnologia",
            tokens: &[
                ("A", "ART"), ("startup", "N"), ("brasileira", "ADJ"), ("recebeu", "V"),
                ("um", "ART"), ("investimento", "N"), ("de", "PREP"), ("200", "NUM"),
                ("milhões", "N"), ("de", "PREP"), ("dólares", "N"), (".", "PU"),
            ],
        },

        // ===== CULTURA =====
        TaggedSentence {
            text: "Jorge Amado foi um dos maiores escritores brasileiros.",
            domain: "cultura",
            tokens: &[
                ("Jorge", "NPROP"), ("Amado", "NPROP"), ("foi", "V"), ("um", "ART"),
                ("dos", "PREP"), ("maiores", "ADJ"), ("escritores", "N"),
                ("brasileiros", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Carmen Miranda representou o Brasil no cinema americano.",
            domain: "cultura",
            tokens: &[
                ("Carmen", "NPROP"), ("Miranda", "NPROP"), ("representou", "V"), ("o", "ART"),
                ("Brasil", "NPROP"), ("no", "PREP"), ("cinema", "N"), ("americano", "ADJ"),
                (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O museu recebeu milhares de visitantes durante a exposição.",
            domain: "cultura",
            tokens: &[
                ("O", "ART"), ("museu", "N"), ("recebeu", "V"), ("milhares", "N"),
                ("de", "PREP"), ("visitantes", "N"), ("durante", "PREP"), ("a", "ART"),
                ("exposição", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A cantora lançou ontem seu novo álbum pela gravadora.",
            domain: "cultura",
            tokens: &[
                ("A", "ART"), ("cantora", "N"), ("lançou", "V"), ("ontem", "ADV"),
                ("seu", "PRO"), ("novo", "ADJ"), ("álbum", "N"), ("pela", "PREP"),
                ("gravadora", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O filme brasileiro ganhou o prêmio principal do festival.",
            domain: "cultura",
            tokens: &[
                ("O", "ART"), ("filme", "N"), ("brasileiro", "ADJ"), ("ganhou", "V"),
                ("o", "ART"), ("prêmio", "N"), ("principal", "ADJ"), ("do", "PREP"),
                ("festival", "N"), (".", "PU"),
            ],
        },

        // ===== MEIO AMBIENTE =====
        TaggedSentence {
            text: "O desmatamento da Floresta Amazônica atingiu 11 mil quilômetros quadrados.",
            domain: "meio ambiente",
            tokens: &[
                ("O", "ART"), ("desmatamento", "N"), ("da", "PREP"), ("Floresta", "NPROP"),
                ("Amazônica", "NPROP"), ("atingiu", "V"), ("11", "NUM"), ("mil", "NUM"),
                ("quilômetros", "N"), ("quadrados", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O Rio São Francisco corta seis estados brasileiros.",
            domain: "meio ambiente",
            tokens: &[
                ("O", "ART"), ("Rio", "NPROP"), ("São", "NPROP"), ("Francisco", "NPROP"),
                ("corta", "V"), ("seis", "NUM"), ("estados", "N"), ("brasileiros", "ADJ"),
                (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os pesquisadores registraram espécies raras na reserva natural.",
            domain: "meio ambiente",
            tokens: &[
                ("Os", "ART"), ("pesquisadores", "N"), ("registraram", "V"), ("espécies", "N"),
                ("raras", "ADJ"), ("na", "PREP"), ("reserva", "N"), ("natural", "ADJ"),
                (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A chuva forte alagou rapidamente as ruas da cidade.",
            domain: "meio ambiente",
            tokens: &[
                ("A", "ART"), ("chuva", "N"), ("forte", "ADJ"), ("alagou", "V"),
                ("rapidamente", "ADV"), ("as", "ART"), ("ruas", "N"), ("da", "PREP"),
                ("cidade", "N"), (".", "PU"),
            ],
        },

        // ===== EDUCAÇÃO =====
        TaggedSentence {
            text: "A Universidade de São Paulo é a melhor instituição da América Latina.",
            domain: "educação",
            tokens: &[
                ("A", "ART"), ("Universidade", "NPROP"), ("de", "PREP"), ("São", "NPROP"),
                ("Paulo", "NPROP"), ("é", "V"), ("a", "ART"), ("melhor", "ADJ"),
                ("instituição", "N"), ("da", "PREP"), ("América", "NPROP"),
                ("Latina", "NPROP"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os alunos apresentaram seus projetos na feira de ciências.",
            domain: "educação",
            tokens: &[
                ("Os", "ART"), ("alunos", "N"), ("apresentaram", "V"), ("seus", "PRO"),
                ("projetos", "N"), ("na", "PREP"), ("feira", "N"), ("de", "PREP"),
                ("ciências", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O professor explicou que a prova seria difícil.",
            domain: "educação",
            tokens: &[
                ("O", "ART"), ("professor", "N"), ("explicou", "V"), ("que", "KS"),
                ("a", "ART"), ("prova", "N"), ("seria", "V"), ("difícil", "ADJ"),
                (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A escola pública recebeu novos computadores do governo federal.",
            domain: "educação",
            tokens: &[
                ("A", "ART"), ("escola", "N"), ("pública", "ADJ"), ("recebeu", "V"),
                ("novos", "ADJ"), ("computadores", "N"), ("do", "PREP"), ("governo", "N"),
                ("federal", "ADJ"), (".", "PU"),
            ],
        },

        // ===== POLÍTICA =====
        TaggedSentence {
            text: "O presidente viajou para a França e se reuniu com empresários.",
            domain: "política",
            tokens: &[
                ("O", "ART"), ("presidente", "N"), ("viajou", "V"), ("para", "PREP"),
                ("a", "ART"), ("França", "NPROP"), ("e", "KC"), ("se", "PRO"),
                ("reuniu", "V"), ("com", "PREP"), ("empresários", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O Supremo Tribunal Federal julgou o caso na semana passada.",
            domain: "política",
            tokens: &[
                ("O", "ART"), ("Supremo", "NPROP"), ("Tribunal", "NPROP"),
                ("Federal", "NPROP"), ("julgou", "V"), ("o", "ART"), ("caso", "N"),
                ("na", "PREP"), ("semana", "N"), ("passada", "ADJ"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "Os deputados aprovaram a reforma depois de um longo debate.",
            domain: "política",
            tokens: &[
                ("Os", "ART"), ("deputados", "N"), ("aprovaram", "V"), ("a", "ART"),
                ("reforma", "N"), ("depois", "ADV"), ("de", "PREP"), ("um", "ART"),
                ("longo", "ADJ"), ("debate", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A prefeitura anunciou obras urgentes, mas não divulgou o custo.",
            domain: "política",
            tokens: &[
                ("A", "ART"), ("prefeitura", "N"), ("anunciou", "V"), ("obras", "N"),
                ("urgentes", "ADJ"), (",", "PU"), ("mas", "KC"), ("não", "ADV"),
                ("divulgou", "V"), ("o", "ART"), ("custo", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "O governador visitou ontem as cidades atingidas pela enchente.",
            domain: "política",
            tokens: &[
                ("O", "ART"), ("governador", "N"), ("visitou", "V"), ("ontem", "ADV"),
                ("as", "ART"), ("cidades", "N"), ("atingidas", "PCP"), ("pela", "PREP"),
                ("enchente", "N"), (".", "PU"),
            ],
        },
        TaggedSentence {
            text: "A ministra confirmou que o programa social continuará em 2025.",
            domain: "política",
            tokens: &[
                ("A", "ART"), ("ministra", "N"), ("confirmou", "V"), ("que", "KS"),
                ("o", "ART"), ("programa", "N"), ("social", "ADJ"), ("continuará", "V"),
                ("em", "PREP"), ("2025", "NUM"), (".", "PU"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_tags_belong_to_tagset() {
        for sentence in get_corpus() {
            for (word, tag) in sentence.tokens {
                assert!(
                    TAGSET.contains(tag),
                    "tag desconhecida '{}' na palavra '{}'",
                    tag,
                    word
                );
            }
        }
    }

    #[test]
    fn test_corpus_sentences_nonempty() {
        let corpus = get_corpus();
        assert!(!corpus.is_empty());
        for sentence in &corpus {
            assert!(!sentence.tokens.is_empty());
        }
    }

    #[test]
    fn test_split_is_prefix_suffix_partition() {
        let sents = EmbeddedCorpus.tagged_sents(None);
        let (train, test) = train_test_split(&sents, 0.9);

        assert_eq!(train.len() + test.len(), sents.len());
        // A ordem original é preservada: treino é prefixo, teste é sufixo
        assert_eq!(train[0], sents[0]);
        assert_eq!(test[test.len() - 1], sents[sents.len() - 1]);
    }

    #[test]
    fn test_split_is_deterministic() {
        let sents = EmbeddedCorpus.tagged_sents(None);
        let (train_a, test_a) = train_test_split(&sents, 0.9);
        let (train_b, test_b) = train_test_split(&sents, 0.9);
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_split_extreme_ratios() {
        let sents = EmbeddedCorpus.tagged_sents(None);
        let (train, test) = train_test_split(&sents, 1.0);
        assert_eq!(train.len(), sents.len());
        assert!(test.is_empty());

        let (train, test) = train_test_split(&sents, 0.0);
        assert!(train.is_empty());
        assert_eq!(test.len(), sents.len());
    }

    #[test]
    fn test_domain_filter() {
        let all = EmbeddedCorpus.tagged_sents(None);
        let saude = EmbeddedCorpus.tagged_sents(Some("saúde"));
        assert!(!saude.is_empty());
        assert!(saude.len() < all.len());
    }
}
