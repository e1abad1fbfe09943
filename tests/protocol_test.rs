use assert_float_eq::assert_float_absolute_eq;

use nutri_protocol_rs::parser::{
    extract_quantity, normalize_food_name, quantity_in_grams, tokenize, Unit,
};

#[test]
fn test_leading_grams_are_exact() {
    for phrase in ["200g arroz", "200 g arroz", "200G Arroz integral", "200g"] {
        assert_eq!(quantity_in_grams(phrase), 200.0, "phrase: {phrase}");
    }
}

#[test]
fn test_unit_conversion_heuristics() {
    // kg and l: x1000; ml: x1; colher(es): x15; xícara(s): x240;
    // unidade(s) and fatia(s): x50; g or no unit: x1.
    let cases = [
        ("3kg batata", 3000.0),
        ("2 l água", 2000.0),
        ("250ml suco", 250.0),
        ("3 colher azeite", 45.0),
        ("2 colheres mel", 30.0),
        ("0.5 xícara arroz", 120.0),
        ("2 xícaras leite", 480.0),
        ("4 unidade ovo", 200.0),
        ("2 unidades pão", 100.0),
        ("3 fatia queijo", 150.0),
        ("1 fatias presunto", 50.0),
        ("80g brócolis", 80.0),
        ("80 brócolis", 80.0),
    ];

    for (phrase, grams) in cases {
        assert_float_absolute_eq!(quantity_in_grams(phrase), grams, 1e-9);
    }
}

#[test]
fn test_unquantified_phrase_is_100g() {
    let q = extract_quantity("banana prata");
    assert_eq!(q.grams, 100.0);
    assert_eq!(q.unit, Unit::Gram);
}

#[test]
fn test_only_first_alternative_is_kept() {
    let protocols = [
        ("100g arroz ou 120g batata", "100g arroz"),
        ("100g arroz OU 120g batata ou 90g mandioca", "100g arroz"),
        ("+ 1 banana Ou 1 maçã", "1 banana"),
    ];

    for (protocol, expected) in protocols {
        assert_eq!(tokenize(protocol), vec![expected.to_string()]);
    }
}

#[test]
fn test_tokenize_then_normalize() {
    let keys: Vec<String> = tokenize("100g aveia; 200ml leite desnatado; + 2 fatias de pão integral")
        .iter()
        .map(|p| normalize_food_name(p))
        .collect();

    assert_eq!(keys, vec!["aveia", "leite desnatado", "pão integral"]);
}

#[test]
fn test_normalize_is_idempotent() {
    for phrase in ["150g peito de frango", "2 colheres de azeite", "1 banana", "x"] {
        let once = normalize_food_name(phrase);
        assert_eq!(normalize_food_name(&once), once, "phrase: {phrase}");
    }
}
