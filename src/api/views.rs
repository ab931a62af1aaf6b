use crate::rating::types::{PlayerName, Standing};

/// Ranking page: links to the two forms plus one heading per player.
pub fn standings_page(rows: &[Standing]) -> String {
    let mut page = String::from(
        "<html><a href=\"/addPlayer\">Add Player</a> - <a href=\"/addResult\">Add Result</a><br />",
    );
    for row in rows {
        page.push_str(&format!("<h1>{}: {}</h1>", row.player, row.rating));
    }
    page.push_str("</html>");
    page
}

pub fn add_player_form() -> String {
    "<html>\n  <body>\n    <form method=\"post\" action=\"/addPlayer\">\n      \
     <input type=\"text\" name=\"player\" placeholder=\"Player Name\" />\n      \
     <input type=\"submit\" value=\"Submit\">\n    </form>\n  </body>\n</html>"
        .to_string()
}

pub fn add_result_form(roster: &[PlayerName]) -> String {
    let options: String = roster
        .iter()
        .map(|name| format!("<option>{name}</option>"))
        .collect();

    format!(
        "<html>\n  <body>\n    <form method=\"post\" action=\"/addResult\">\n      \
         <h3>Select Winner</h3>\n      <select name=\"winner\">{options}</select>\n      \
         <h3>Select Loser</h3>\n      <select name=\"loser\">{options}</select>\n      \
         <br />\n      <input type=\"submit\" value=\"Submit\" />\n    </form>\n  </body>\n</html>"
    )
}

pub fn player_added_page(name: &str) -> String {
    format!(
        "<html>Added {name}. <a href=\"/addPlayer\">Add another</a> or \
         <a href=\"/\">view rankings</a></html>"
    )
}

pub fn invalid_name_page(name: &str) -> String {
    format!(
        "<html>Player \"{}\" not added - names must be letters and underscores only \
         (starting with a letter) and between 2 and 30 characters. \
         <a href=\"/addPlayer\">Try Again?</a></html>",
        escape_html(name)
    )
}

pub fn result_added_page(winner: &str, loser: &str) -> String {
    format!(
        "<html>Added game result with winner of {winner} and loser of {loser}. \
         <a href=\"/addResult\">Add another</a> or <a href=\"/\">view rankings</a></html>"
    )
}

// Rejected names are echoed back verbatim, so they cannot go into the
// page unescaped.
fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
