//! Integration tests for end-to-end scanning.
//!
//! These tests replay complete programs through the scanner and compare the
//! full rendered output, line for line, against the expected lexeme
//! sequences of the reference implementation.

use lexer::scanner::scanner::scan;

#[test]
fn test_scan_mixed_literals_and_comments() {
    let source = r#""Hola \" mundo!"
""
'A'
3.2
-100
some_name
fin_principal
entero
/* multiline
   comment */ aaa // single-line comment
+
-
#"#;

    let expected = r#"<tk_cadena,Hola \" mundo!,1,2>
<tk_cadena,,1,19>
<tk_caracter,A,1,22>
<tk_real,3.2,2,1>
<tk_entero,-100,3,1>
<id,some_name,4,1>
<fin_principal,5,1>
<entero,6,1>
<id,aaa,8,15>
<tk_mas,9,1>
<tk_menos,10,1>
>>> Error lexico (linea: 11, posicion: 1)"#;

    let state = scan(source);
    assert_eq!(state.render(), expected);
    assert!(!state.valid());
}

#[test]
fn test_scan_minimal_program() {
    let source = "funcion_principal

    imprimir (3+5);

fin_principal";

    let expected = "<funcion_principal,1,1>
<imprimir,3,5>
<tk_par_izq,3,14>
<tk_entero,3,3,15>
<tk_mas,3,16>
<tk_entero,5,3,17>
<tk_par_der,3,18>
<tk_pyc,3,19>
<fin_principal,5,1>";

    let state = scan(source);
    assert_eq!(state.render(), expected);
    assert!(state.valid());
}

#[test]
fn test_scan_program_with_trailing_comment() {
    let source = "funcion_principal
    entero a1 = 5 * 3;
    imprimir( a1 / 10 );
fin_principal
// comentario al final";

    let expected = "<funcion_principal,1,1>
<entero,2,5>
<id,a1,2,12>
<tk_asig,2,15>
<tk_entero,5,2,17>
<tk_mult,2,19>
<tk_entero,3,2,21>
<tk_pyc,2,22>
<imprimir,3,5>
<tk_par_izq,3,13>
<id,a1,3,15>
<tk_div,3,18>
<tk_entero,10,3,20>
<tk_par_der,3,23>
<tk_pyc,3,24>
<fin_principal,4,1>";

    let state = scan(source);
    assert_eq!(state.render(), expected);
    assert!(state.valid());
}

#[test]
fn test_scan_function_after_multiline_comment() {
    let source = "/* esto no debe
importar, pero cuenta las lineas
*/
funcion entero sum(entero a, entero b) hacer
    retornar a + b;
    // fin
fin_funcion";

    let expected = "<funcion,4,1>
<entero,4,9>
<id,sum,4,16>
<tk_par_izq,4,19>
<entero,4,20>
<id,a,4,27>
<tk_coma,4,28>
<entero,4,30>
<id,b,4,37>
<tk_par_der,4,38>
<hacer,4,40>
<retornar,5,5>
<id,a,5,14>
<tk_mas,5,16>
<id,b,5,18>
<tk_pyc,5,19>
<fin_funcion,7,1>";

    let state = scan(source);
    assert_eq!(state.render(), expected);
    assert!(state.valid());
}

#[test]
fn test_scan_stops_at_unrecognised_character() {
    let source = "/* esto no debe
importar, pero cuenta las lineas
*/
funcion entero sum(entero a, entero b) hacer
    retornar a + Ñ;
    // fin
fin_funcion";

    let expected = "<funcion,4,1>
<entero,4,9>
<id,sum,4,16>
<tk_par_izq,4,19>
<entero,4,20>
<id,a,4,27>
<tk_coma,4,28>
<entero,4,30>
<id,b,4,37>
<tk_par_der,4,38>
<hacer,4,40>
<retornar,5,5>
<id,a,5,14>
<tk_mas,5,16>
>>> Error lexico (linea: 5, posicion: 18)";

    let state = scan(source);
    assert_eq!(state.render(), expected);
    assert!(!state.valid());
}

#[test]
fn test_scan_unterminated_string_produces_no_output() {
    let state = scan("\"unterminated");

    assert_eq!(state.render(), "");
    assert!(!state.valid());
}
