//! Hardcoded FIRST/FOLLOW/PREDICT reference tables.
//!
//! The three blocks below are fixed data for the recognizer's grammar.
//! They are printed verbatim after a successful parse and are never
//! derived at runtime, so running the tool twice on the same input
//! produces byte-identical output. Non-terminals are listed in
//! alphabetical order; terminal names use the token kind tags.

use std::fmt::Write;
use std::sync::LazyLock;

use indexmap::IndexMap;

type Table = IndexMap<&'static str, &'static [&'static str]>;

const ATOM_FIRST: &[&str] = &[
    "id", "tk_entero", "tk_cadena", "tk_par_izq", "tk_cor_izq", "True", "False", "None", "lambda",
];

const SIGNED_FIRST: &[&str] = &[
    "tk_suma", "tk_resta", "id", "tk_entero", "tk_cadena", "tk_par_izq", "tk_cor_izq", "True",
    "False", "None", "lambda",
];

const EXPR_FIRST: &[&str] = &[
    "not", "tk_suma", "tk_resta", "id", "tk_entero", "tk_cadena", "tk_par_izq", "tk_cor_izq",
    "True", "False", "None", "lambda",
];

const SIMPLE_STMT_FIRST: &[&str] = &[
    "pass", "break", "continue", "return", "print", "not", "tk_suma", "tk_resta", "id",
    "tk_entero", "tk_cadena", "tk_par_izq", "tk_cor_izq", "True", "False", "None", "lambda",
];

const STMT_FIRST: &[&str] = &[
    "def", "if", "while", "for", "pass", "break", "continue", "return", "print", "not", "tk_suma",
    "tk_resta", "id", "tk_entero", "tk_cadena", "tk_par_izq", "tk_cor_izq", "True", "False",
    "None", "lambda",
];

const STMT_FOLLOW: &[&str] = &[
    "def", "if", "while", "for", "pass", "break", "continue", "return", "print", "not", "tk_suma",
    "tk_resta", "id", "tk_entero", "tk_cadena", "tk_par_izq", "tk_cor_izq", "True", "False",
    "None", "lambda", "elif", "else", "EOF",
];

const EXPR_FOLLOW: &[&str] = &[
    "tk_asig", "tk_coma", "tk_dos_puntos", "tk_par_der", "tk_cor_der", "for", "if", "EOF",
];

const AND_FOLLOW: &[&str] = &[
    "or", "tk_asig", "tk_coma", "tk_dos_puntos", "tk_par_der", "tk_cor_der", "for", "if", "EOF",
];

const NOT_FOLLOW: &[&str] = &[
    "and", "or", "tk_asig", "tk_coma", "tk_dos_puntos", "tk_par_der", "tk_cor_der", "for", "if",
    "EOF",
];

const ARIT_FOLLOW: &[&str] = &[
    "tk_igual_igual", "tk_distinto", "tk_menor", "tk_mayor", "tk_menor_igual", "tk_mayor_igual",
    "in", "is", "and", "or", "tk_asig", "tk_coma", "tk_dos_puntos", "tk_par_der", "tk_cor_der",
    "for", "if", "EOF",
];

const TERM_FOLLOW: &[&str] = &[
    "tk_suma", "tk_resta", "tk_igual_igual", "tk_distinto", "tk_menor", "tk_mayor",
    "tk_menor_igual", "tk_mayor_igual", "in", "is", "and", "or", "tk_asig", "tk_coma",
    "tk_dos_puntos", "tk_par_der", "tk_cor_der", "for", "if", "EOF",
];

const FACTOR_FOLLOW: &[&str] = &[
    "tk_mul", "tk_div", "tk_mod", "tk_suma", "tk_resta", "tk_igual_igual", "tk_distinto",
    "tk_menor", "tk_mayor", "tk_menor_igual", "tk_mayor_igual", "in", "is", "and", "or",
    "tk_asig", "tk_coma", "tk_dos_puntos", "tk_par_der", "tk_cor_der", "for", "if", "EOF",
];

const ATOM_FOLLOW: &[&str] = &[
    "tk_par_izq", "tk_cor_izq", "tk_punto", "tk_mul", "tk_div", "tk_mod", "tk_suma", "tk_resta",
    "tk_igual_igual", "tk_distinto", "tk_menor", "tk_mayor", "tk_menor_igual", "tk_mayor_igual",
    "in", "is", "and", "or", "tk_asig", "tk_coma", "tk_dos_puntos", "tk_par_der", "tk_cor_der",
    "for", "if", "EOF",
];

static PRIMEROS: LazyLock<Table> = LazyLock::new(|| {
    IndexMap::from([
        ("atomo", ATOM_FIRST),
        ("bloque", STMT_FIRST),
        ("comparacion", SIGNED_FIRST),
        ("definicion_funcion", &["def"] as &[_]),
        ("expr_and", EXPR_FIRST),
        ("expr_arit", SIGNED_FIRST),
        ("expr_not", EXPR_FIRST),
        ("expr_or", EXPR_FIRST),
        ("expresion", EXPR_FIRST),
        ("expresion_lambda", &["lambda"]),
        ("factor", SIGNED_FIRST),
        ("lista_argumentos", EXPR_FIRST),
        ("lista_expresiones", EXPR_FIRST),
        ("parametro", &["id"]),
        ("parametros", &["id"]),
        ("parametros_lambda", &["id"]),
        ("potencia", ATOM_FIRST),
        (
            "programa",
            &[
                "def", "if", "while", "for", "pass", "break", "continue", "return", "print",
                "not", "tk_suma", "tk_resta", "id", "tk_entero", "tk_cadena", "tk_par_izq",
                "tk_cor_izq", "True", "False", "None", "lambda", "ε",
            ],
        ),
        ("sentencia", STMT_FIRST),
        ("sentencia_expresion", EXPR_FIRST),
        ("sentencia_for", &["for"]),
        ("sentencia_if", &["if"]),
        ("sentencia_simple", SIMPLE_STMT_FIRST),
        ("sentencia_while", &["while"]),
        ("termino", SIGNED_FIRST),
        ("tipo_anotado", &["id", "tk_cor_izq"]),
    ])
});

static SIGUIENTES: LazyLock<Table> = LazyLock::new(|| {
    IndexMap::from([
        ("atomo", ATOM_FOLLOW),
        ("bloque", STMT_FOLLOW),
        ("comparacion", NOT_FOLLOW),
        ("definicion_funcion", STMT_FOLLOW),
        ("expr_and", AND_FOLLOW),
        ("expr_arit", ARIT_FOLLOW),
        ("expr_not", AND_FOLLOW),
        ("expr_or", EXPR_FOLLOW),
        ("expresion", EXPR_FOLLOW),
        ("expresion_lambda", EXPR_FOLLOW),
        ("factor", FACTOR_FOLLOW),
        ("lista_argumentos", &["tk_par_der"] as &[_]),
        (
            "lista_expresiones",
            &[
                "tk_asig", "def", "if", "while", "for", "pass", "break", "continue", "return",
                "print", "not", "tk_suma", "tk_resta", "id", "tk_entero", "tk_cadena",
                "tk_par_izq", "tk_cor_izq", "True", "False", "None", "lambda", "elif", "else",
                "EOF",
            ],
        ),
        ("parametro", &["tk_coma", "tk_par_der"]),
        ("parametros", &["tk_par_der"]),
        ("parametros_lambda", &["tk_dos_puntos"]),
        ("potencia", FACTOR_FOLLOW),
        ("programa", &["EOF"]),
        ("sentencia", STMT_FOLLOW),
        ("sentencia_expresion", STMT_FOLLOW),
        ("sentencia_for", STMT_FOLLOW),
        ("sentencia_if", STMT_FOLLOW),
        ("sentencia_simple", STMT_FOLLOW),
        ("sentencia_while", STMT_FOLLOW),
        ("termino", TERM_FOLLOW),
        ("tipo_anotado", &["tk_coma", "tk_par_der"]),
    ])
});

static PREDICCION: LazyLock<Table> = LazyLock::new(|| {
    IndexMap::from([
        ("atomo -> id", &["id"] as &[_]),
        ("atomo -> tk_entero", &["tk_entero"]),
        ("atomo -> tk_cadena", &["tk_cadena"]),
        ("atomo -> True", &["True"]),
        ("atomo -> False", &["False"]),
        ("atomo -> None", &["None"]),
        ("atomo -> ( expresion )", &["tk_par_izq"]),
        ("atomo -> [ lista_elementos ]", &["tk_cor_izq"]),
        ("atomo -> expresion_lambda", &["lambda"]),
        ("bloque -> sentencia { sentencia }", STMT_FIRST),
        (
            "comparacion -> expr_arit { op_comparacion expr_arit }",
            SIGNED_FIRST,
        ),
        (
            "definicion_funcion -> def id ( parametros ) : bloque",
            &["def"],
        ),
        ("expr_and -> expr_not { and expr_not }", EXPR_FIRST),
        ("expr_arit -> termino { op_aditivo termino }", SIGNED_FIRST),
        ("expr_not -> not expr_not", &["not"]),
        ("expr_not -> comparacion", SIGNED_FIRST),
        ("expr_or -> expr_and { or expr_and }", EXPR_FIRST),
        ("expresion -> expr_or", EXPR_FIRST),
        (
            "expresion_lambda -> lambda [ parametros_lambda ] : expresion",
            &["lambda"],
        ),
        ("factor -> op_signo factor", &["tk_suma", "tk_resta"]),
        ("factor -> potencia", ATOM_FIRST),
        (
            "lista_argumentos -> expresion { , expresion } [ , ]",
            EXPR_FIRST,
        ),
        (
            "lista_argumentos -> expresion comp_for { comp_for }",
            EXPR_FIRST,
        ),
        ("lista_expresiones -> expresion { , expresion }", EXPR_FIRST),
        ("parametro -> id [ : tipo_anotado ]", &["id"]),
        ("parametros -> parametro { , parametro } [ , ]", &["id"]),
        ("parametros_lambda -> id { , id }", &["id"]),
        ("potencia -> atomo { trailer }", ATOM_FIRST),
        ("programa -> sentencia programa", STMT_FIRST),
        ("programa -> ε", &["EOF"]),
        ("sentencia -> definicion_funcion", &["def"]),
        ("sentencia -> sentencia_if", &["if"]),
        ("sentencia -> sentencia_while", &["while"]),
        ("sentencia -> sentencia_for", &["for"]),
        ("sentencia -> sentencia_simple", SIMPLE_STMT_FIRST),
        (
            "sentencia_expresion -> lista_expresiones { = lista_expresiones }",
            EXPR_FIRST,
        ),
        (
            "sentencia_for -> for id in expresion : bloque",
            &["for"],
        ),
        (
            "sentencia_if -> if expresion : bloque { elif expresion : bloque } [ else : bloque ]",
            &["if"],
        ),
        ("sentencia_simple -> pass", &["pass"]),
        ("sentencia_simple -> break", &["break"]),
        ("sentencia_simple -> continue", &["continue"]),
        ("sentencia_simple -> return [ expresion ]", &["return"]),
        (
            "sentencia_simple -> print ( lista_argumentos )",
            &["print"],
        ),
        ("sentencia_simple -> sentencia_expresion", EXPR_FIRST),
        ("sentencia_while -> while expresion : bloque", &["while"]),
        ("tipo_anotado -> id", &["id"]),
        ("tipo_anotado -> [ id ]", &["tk_cor_izq"]),
    ])
});

/// Renders the three reference blocks exactly as they appear in the
/// output file.
pub fn render() -> String {
    let mut out = String::new();
    write_block(&mut out, "PRIMEROS:", &PRIMEROS);
    out.push('\n');
    write_block(&mut out, "SIGUIENTES:", &SIGUIENTES);
    out.push('\n');
    write_block(&mut out, "PREDICCION", &PREDICCION);
    out
}

fn write_block(out: &mut String, title: &str, table: &Table) {
    let _ = writeln!(out, "{title}");
    for (name, set) in table {
        let _ = writeln!(out, "{name} : {{ {} }}", set.join(", "));
    }
}
