//! Background scenes, keyed by `Environment::background_asset`

const LIBRARY: &[&str] = &[
    r"  _______________________________________________  ",
    r" |  ___   ___   ___   ___   ___   ___   ___   ___| ",
    r" | |||| |||| |||| |||| |||| |||| |||| |||| ||||  | ",
    r" | |||| |||| |||| |||| |||| |||| |||| |||| ||||  | ",
    r" |_______________________________________________| ",
    r" |  ___   ___   ___   ___   ___   ___   ___   ___| ",
    r" | |||| |||| |||| |||| |||| |||| |||| |||| ||||  | ",
    r" |_______________________________________________| ",
    r"            .-----------------------.              ",
    r"           /   ~  quiet reading  ~   \             ",
    r"          '---------------------------'            ",
    r"               ||               ||                 ",
    r"         (  )  ||      /\/\     ||                 ",
    r"        (____) ||     (    )    ||                 ",
];

const CAFE: &[&str] = &[
    r"   ___________________________________________     ",
    r"  |   COFFEE  ~  TEA  ~  PASTRIES  ~  WI-FI   |    ",
    r"  |___________________________________________|    ",
    r"     _        _        _        _        _         ",
    r"    ( )      ( )      ( )      ( )      ( )        ",
    r"   __|________|________|________|________|__       ",
    r"  |                                         |      ",
    r"  |      .-~~~-.                .-~~~-.     |      ",
    r"  |     |  c[_] |              | c[_]  |    |      ",
    r"  |      `-----'                `-----'     |      ",
    r"  |_________________________________________|      ",
    r"        ||                           ||            ",
    r"        ||                           ||            ",
];

/// Scene lines for `key`, or an empty scene for an unknown key
pub fn scene(key: &str) -> &'static [&'static str] {
    match key {
        "scenes/library" => LIBRARY,
        "scenes/cafe" => CAFE,
        _ => {
            log::warn!("Unknown background asset {key}");
            &[]
        }
    }
}
