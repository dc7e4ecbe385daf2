//! Line-oriented order parsing for the hot-seat loop (spec.md §6):
//! `FROM TO SHIPS`, comma-separated, one order per stdin line, a blank
//! line submits the batch as-is. Mirrors the teacher's
//! `parse_spec`/`Specified` string-sub-language convention
//! (`common/src/cli.rs`) without its char-by-char fallback, since this
//! format has no single-letter shorthand to fall back to.

use engine::game::order::Order;
use engine::game::star::StarId;

/// One line's worth of order, or an empty line (end of batch).
pub fn parse_order_line(line: &str) -> Result<Option<Order>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [from, to, ships] = parts.as_slice() else {
        return Err(format!(
            "expected 'FROM,TO,SHIPS', got '{line}'"
        ));
    };

    let from_star = parse_star_id(from)?;
    let to_star = parse_star_id(to)?;
    let ships: u32 = ships
        .parse()
        .map_err(|_| format!("'{ships}' is not a valid ship count"))?;

    Ok(Some(Order {
        from_star,
        to_star,
        ships,
    }))
}

fn parse_star_id(token: &str) -> Result<StarId, String> {
    let mut chars = token.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(format!("'{token}' is not a single-letter star id"));
    };
    Ok(StarId::from_char(c))
}
