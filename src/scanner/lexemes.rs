use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("funcion_principal");
        set.insert("booleano");
        set.insert("caracter");
        set.insert("entero");
        set.insert("real");
        set.insert("cadena");
        set.insert("fin_principal");
        set.insert("leer");
        set.insert("imprimir");
        set.insert("si");
        set.insert("si_no");
        set.insert("entonces");
        set.insert("fin_si");
        set.insert("mientras");
        set.insert("hacer");
        set.insert("fin_mientras");
        set.insert("para");
        set.insert("fin_para");
        set.insert("seleccionar");
        set.insert("entre");
        set.insert("caso");
        set.insert("romper");
        set.insert("defecto");
        set.insert("fin_seleccionar");
        set.insert("estructura");
        set.insert("fin_estructura");
        set.insert("funcion");
        set.insert("fin_funcion");
        set.insert("falso");
        set.insert("verdadero");
        set.insert("retornar");
        set
    };
    pub static ref DOUBLE_TOKENS: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("==", "tk_igual");
        map.insert("!=", "tk_dif");
        map.insert("&&", "tk_y");
        map.insert("||", "tk_o");
        map.insert("<=", "tk_menor_igual");
        map.insert(">=", "tk_mayor_igual");
        map
    };
    pub static ref SINGLE_TOKENS: HashMap<char, &'static str> = {
        let mut map = HashMap::new();
        map.insert('+', "tk_mas");
        map.insert('-', "tk_menos");
        map.insert('*', "tk_mult");
        map.insert('/', "tk_div");
        map.insert('%', "tk_mod");
        map.insert('=', "tk_asig");
        map.insert('!', "tk_neg");
        map.insert(':', "tk_dosp");
        map.insert('<', "tk_menor");
        map.insert('>', "tk_mayor");
        map.insert('\'', "tk_comilla_sen");
        map.insert('"', "tk_comilla_dob");
        map.insert(';', "tk_pyc");
        map.insert(',', "tk_coma");
        map.insert('(', "tk_par_izq");
        map.insert(')', "tk_par_der");
        map
    };
}

/// One classified unit of scanner output.
///
/// `Plain` lexemes carry a category and a position only (reserved words,
/// operators, punctuation); `Named` lexemes additionally carry the literal
/// text (identifiers, numbers, strings, characters); `Error` is the
/// diagnostic produced by the fallback rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    Plain {
        name: &'static str,
        position: Position,
    },
    Named {
        name: &'static str,
        text: String,
        position: Position,
    },
    Error {
        position: Position,
    },
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lexeme::Plain { name, position } => {
                write!(f, "<{},{},{}>", name, position.line, position.column)
            }
            Lexeme::Named {
                name,
                text,
                position,
            } => write!(
                f,
                "<{},{},{},{}>",
                name, text, position.line, position.column
            ),
            Lexeme::Error { position } => write!(
                f,
                ">>> Error lexico (linea: {}, posicion: {})",
                position.line, position.column
            ),
        }
    }
}

impl Lexeme {
    pub fn string(text: String, position: Position) -> Lexeme {
        Lexeme::Named {
            name: "tk_cadena",
            text,
            position,
        }
    }

    pub fn character(text: String, position: Position) -> Lexeme {
        Lexeme::Named {
            name: "tk_caracter",
            text,
            position,
        }
    }

    /// Numbers containing a `.` are reals, everything else is an integer.
    pub fn number(text: String, position: Position) -> Lexeme {
        let name = if text.contains('.') {
            "tk_real"
        } else {
            "tk_entero"
        };
        Lexeme::Named {
            name,
            text,
            position,
        }
    }

    /// Reserved words become their own category with no text field; any
    /// other identifier-shaped text becomes an `id` lexeme.
    pub fn name(text: String, position: Position) -> Lexeme {
        if let Some(word) = RESERVED_LOOKUP.get(text.as_str()).copied() {
            Lexeme::Plain {
                name: word,
                position,
            }
        } else {
            Lexeme::Named {
                name: "id",
                text,
                position,
            }
        }
    }

    pub fn single(symbol: char, position: Position) -> Lexeme {
        Lexeme::Plain {
            name: SINGLE_TOKENS.get(&symbol).copied().unwrap(),
            position,
        }
    }

    pub fn double(pair: &str, position: Position) -> Lexeme {
        Lexeme::Plain {
            name: DOUBLE_TOKENS.get(pair).copied().unwrap(),
            position,
        }
    }

    pub fn error(position: Position) -> Lexeme {
        Lexeme::Error { position }
    }

    pub fn position(&self) -> Position {
        match self {
            Lexeme::Plain { position, .. } => *position,
            Lexeme::Named { position, .. } => *position,
            Lexeme::Error { position } => *position,
        }
    }
}
