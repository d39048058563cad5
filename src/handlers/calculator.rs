//! # Calculadora
//! src/handlers/calculator.rs
//!
//! `GET /calc?a=<int>&b=<int>` responde `Result: <a + b>`.
//!
//! El patrón se consume de izquierda a derecha; en cuanto algo no
//! coincide se deja de leer y los operandos que faltan quedan en 0.
//! La suma es de 32 bits con wraparound.

use crate::http::Response;
use crate::stats::StatsRegistry;
use std::io::{self, Write};

/// Handler para /calc?...
pub fn calculator_handler<W: Write>(
    stream: &mut W,
    stats: &StatsRegistry,
    query: &str,
) -> io::Result<()> {
    let (a, b) = parse_operands(query);
    let result = a.wrapping_add(b);
    log::debug!("calc: {} + {} = {}", a, b, result);

    let response = Response::text(&format!("Result: {}", result));
    let sent = response.write_to(stream)?;
    stats.record_sent(sent);
    Ok(())
}

/// Extrae `a` y `b` de una query con forma `a=<int>&b=<int>`
///
/// # Ejemplo
/// ```
/// use static_stats_server::handlers::calculator::parse_operands;
///
/// assert_eq!(parse_operands("a=3&b=4"), (3, 4));
/// assert_eq!(parse_operands("a=5"), (5, 0));
/// assert_eq!(parse_operands("b=5"), (0, 0));
/// ```
pub fn parse_operands(query: &str) -> (i32, i32) {
    let mut a = 0;
    let mut b = 0;

    let Some(rest) = query.strip_prefix("a=") else {
        return (a, b);
    };
    let Some((value, rest)) = scan_int(rest) else {
        return (a, b);
    };
    a = value;

    let Some(rest) = rest.strip_prefix("&b=") else {
        return (a, b);
    };
    if let Some((value, _)) = scan_int(rest) {
        b = value;
    }

    (a, b)
}

/// Lee un entero decimal al inicio de `input`
///
/// Acepta espacios iniciales y un signo opcional. Retorna el valor y el
/// resto sin consumir, o `None` si no hay ningún dígito.
fn scan_int(input: &str) -> Option<(i32, &str)> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = unsigned[..digits]
        .bytes()
        .fold(0i32, |acc, d| acc.wrapping_mul(10).wrapping_add(i32::from(d - b'0')));
    let value = if negative { magnitude.wrapping_neg() } else { magnitude };

    Some((value, &unsigned[digits..]))
}
