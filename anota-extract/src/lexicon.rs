//! Portuguese keyword lists. Order matters wherever a list is scanned for the
//! first hit.

/// Whole-word income markers, checked before [`EXPENSE_KEYWORDS`].
pub const INCOME_KEYWORDS: &[&str] = &[
    "recebi",
    "ganhei",
    "entrada",
    "depositaram",
    "vendi",
    "salário",
    "bonus",
    "recebimento",
    "entrou",
    "lucro",
    "venda",
    "recebido",
    "pix",
    "transferência",
];

/// Whole-word expense markers. `pix` also appears in the income list and so
/// never reaches this one.
pub const EXPENSE_KEYWORDS: &[&str] = &[
    "paguei",
    "gastei",
    "comprei",
    "pago",
    "gasto",
    "pagar",
    "despesa",
    "compra",
    "pagamento",
    "saída",
    "debitei",
    "debito",
    "transferi",
    "enviei",
    "retirei",
    "retirada",
    "pix",
    "boleto",
    "cartão",
];

/// Substring markers used when neither word list matched.
pub const INCOME_FALLBACK: &[&str] = &[
    "recebi",
    "ganhei",
    "entrada",
    "depositaram",
    "vendi",
    "salário",
    "bonus",
    "recebimento",
];

pub const PREPOSITIONS: &[&str] = &[
    "na", "no", "em", "para", "do", "da", "de", "pro", "pra", "ao", "aos", "às", "dos", "das",
];

/// Category keywords, most specific first ("cartão crédito" before "cartão").
pub const CATEGORY_KEYWORDS: &[&str] = &[
    "mercado",
    "pizzaria",
    "restaurante",
    "farmácia",
    "aluguel",
    "salário",
    "transporte",
    "lazer",
    "luz",
    "água",
    "internet",
    "padaria",
    "cinema",
    "bar",
    "academia",
    "escola",
    "faculdade",
    "livro",
    "presente",
    "viagem",
    "combustível",
    "gasolina",
    "energia",
    "telefone",
    "cartão crédito",
    "cartão débito",
    "cartão",
    "boleto",
    "pix",
    "iptu",
    "ipva",
    "seguro",
    "condomínio",
];

/// Words that never stand as a category on their own, on top of
/// [`PREPOSITIONS`].
pub const CATEGORY_STOPWORDS: &[&str] = &[
    "reais",
    "recebi",
    "ganhei",
    "entrada",
    "depositaram",
    "vendi",
    "paguei",
    "gastei",
    "comprei",
    "pago",
    "gasto",
    "pagar",
    "despesa",
    "compra",
    "pagamento",
    "ontem",
    "hoje",
    "amanhã",
];

/// Lowercase letters a category word may contain.
pub const WORD_CHARS: &str = "a-zçãáéíóúâêôõü";

pub const YESTERDAY: &str = "ontem";
pub const TOMORROW: &str = "amanhã";

/// Spelled-out installment counts.
pub const NUMBER_WORDS: &[(&str, u32)] = &[
    ("duas", 2),
    ("dois", 2),
    ("três", 3),
    ("tres", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
    ("dez", 10),
];

/// Regex alternation of `words`, escaped.
pub(crate) fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

pub(crate) fn is_stopword(token: &str) -> bool {
    PREPOSITIONS.contains(&token) || CATEGORY_STOPWORDS.contains(&token)
}

pub(crate) fn number_word(word: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}
