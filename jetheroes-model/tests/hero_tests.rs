use jetheroes_model::{Hero, HeroId, fold_case};
use serde_json::json;

fn make_hero(id: u64, name: &str) -> Hero {
    Hero::new(HeroId::from(id), name, format!("photos/{id}.jpg"))
}

// ── Construction & fields ────────────────────────────────────────

#[test]
fn hero_fields_accessible() {
    let h = make_hero(1, "Gatot Subroto");
    assert_eq!(h.id.as_str(), "1");
    assert_eq!(h.name, "Gatot Subroto");
    assert_eq!(h.photo_url, "photos/1.jpg");
}

#[test]
fn folded_name_is_lowercase() {
    let h = make_hero(2, "Cut Nyak Dien");
    assert_eq!(h.folded_name(), "cut nyak dien");
}

#[test]
fn fold_case_unifies_sigma_forms() {
    assert_eq!(fold_case("ΑΡΗΣ"), "αρησ");
    assert_eq!(fold_case("άρης"), "άρησ");
    assert_eq!(fold_case("Σ"), fold_case("ς"));
}

#[test]
fn fold_case_expands_sharp_s() {
    assert_eq!(fold_case("Straße"), "strasse");
    assert_eq!(fold_case("STRASSE"), "strasse");
}

#[test]
fn folded_name_uses_fold_case() {
    let h = make_hero(5, "ΑΡΗΣ");
    assert_eq!(h.folded_name(), fold_case("αρης"));
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serde_roundtrip() {
    let original = make_hero(3, "Gajah Mada");
    let json_str = serde_json::to_string(&original).unwrap();
    let parsed: Hero = serde_json::from_str(&json_str).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn deserialize_accepts_camel_case_photo_field() {
    let value = json!({"id": "9", "name": "Kartini", "photoUrl": "photos/kartini.jpg"});
    let hero: Hero = serde_json::from_value(value).unwrap();
    assert_eq!(hero.photo_url, "photos/kartini.jpg");
}

#[test]
fn serialize_uses_snake_case_photo_field() {
    let value = serde_json::to_value(make_hero(4, "Tan Malaka")).unwrap();
    assert_eq!(value["photo_url"], "photos/4.jpg");
    assert_eq!(value["id"], "4");
}

#[test]
fn deserialize_missing_name_fails() {
    let value = json!({"id": "1", "photo_url": ""});
    assert!(serde_json::from_value::<Hero>(value).is_err());
}
