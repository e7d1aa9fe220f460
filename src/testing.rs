//! Testing infrastructure
//!
//! Shared helpers for building token streams by hand and realistic wiki
//! markup sources used across the unit and integration test suites. Tests
//! should build inputs from these helpers and fixtures instead of inlining
//! ad-hoc markup, so behavior changes show up in one place.

use crate::lexer::{Token, TokenKind};

/// Build a token with explicit text.
pub fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

/// Build a word token.
pub fn word(text: &str) -> Token {
    Token::new(TokenKind::Word, text)
}

/// Build a marker token with its canonical source text.
///
/// Only valid for kinds whose source text is fixed; payload-bearing kinds
/// (words, URLs, references and the like) need [`tok`].
pub fn marker(kind: TokenKind) -> Token {
    let text = match kind {
        TokenKind::BeginTemplate => "{{",
        TokenKind::EndTemplate => "}}",
        TokenKind::ToggleBold => "'''",
        TokenKind::ToggleItalics => "''",
        TokenKind::BeginWikiLink => "[[",
        TokenKind::EndWikiLink => "]]",
        TokenKind::BeginExternalLink => "[",
        TokenKind::EndExternalLink => "]",
        TokenKind::BeginTable => "\n{|",
        TokenKind::EndTable => "\n|}",
        TokenKind::Equals => "=",
        TokenKind::BeginReference => "<ref>",
        TokenKind::EndReference => "</ref>",
        TokenKind::NonBreakingSpace => "&nbsp;",
        TokenKind::ListItem => "\n*",
        TokenKind::NewLine => "\n",
        TokenKind::Space => " ",
        TokenKind::Pipe => "|",
        other => panic!("{:?} has no canonical text, build it with tok()", other),
    };
    Token::new(kind, text)
}

/// Wiki markup sources used as fixtures.
pub mod samples {
    /// A real article stub (Finnish Wikipedia, "AC" on adult contemporary
    /// radio formats). Exercises bold markup, templates, plain and piped
    /// wiki links, list items, a heading, namespace and interlanguage
    /// links, and non-ASCII scripts. Every character is covered by the
    /// rule catalog, so the token stream reconstructs it exactly.
    pub const ADULT_CONTEMPORARY: &str = "'''AC''' ({{lyhenne|Adult Contemporary}}) on [[formaattiradio]]ihin liittyvä termi, jolla tarkoitetaan [[pop]]- ja [[rock]]-musiikkia \"aikuiseen makuun\"; ei kovaa rokkia.
* '''Hot AC''' on musiikkityyli, joka sisältää 0–10 vuotta vanhoja nopeatempoisia aikuishittejä; formaattikuvailu ja musiikki ovat paljon lähempänä AC:tä kuin [[CHR]]:ää.
* '''MOR''' - Ei-[[rock]]-tyylisiä [[pop|pophittejä]] ja yleensä 15–45 vuotta vanhoja. Sisältää jotain [[soft AC]] -musiikkia; eli yleisesti sanoen tämä on \"aikuisstandardi\".

== Katso myös ==

* [[The Voice (radioasema)]]

{{Tynkä/Musiikki}}

[[Luokka:Populaarimusiikki]]

[[en:Adult contemporary music]]
[[ko:어덜트 컨템포러리]]
[[ja:アダルトコンテンポラリーミュージック]]
[[sv:Adult contemporary]]";

    /// A made-up article stub exercising references, a table, an external
    /// link with a label, an entity and category/interlanguage links
    /// together. Also fully covered by the rule catalog.
    pub const TALL_BRIDGE: &str = "'''Tall Bridge''' is a [[truss bridge]] over the [[Green River (Utah)|Green River]].<ref name=\"hb\"/> It opened in 1910.<ref>{{cite web|url=http://bridges.example.com/tall|title=Tall Bridge}}</ref>

== History ==

The span was designed by [[Jane Doe]] and cost 4&nbsp;000 dollars.
{| class=\"wikitable\"
|-
| Year || Event
|-
| 1910 || Opened
|}

* [http://bridges.example.com/tall Bridge record]
* [[Category:Bridges]]

[[de:Hohe Brücke]]";

    /// The two URLs that stalled backtracking regex engines for longer
    /// than the match deadline, kept as the canary inputs for timeout
    /// safety.
    pub const INSIDIOUS_URLS: [&str; 2] = [
        "http://www.unhchr.ch/tbs/doc.nsf/(Symbol/CCPR.CO.82.FIN.En?Opendocument|Julkaisija=|Luettu=}}",
        "http://www.terveyskirjasto.fi/terveyskirjasto/tk.koti?p_artikkeli=dlk00495&p_haku=Sukupuoliset%20kohdeh%E4iri%F6t%20(pedofilia%20ja%20muut%20parafiliat)",
    ];
}
