// OCR page fixtures modelled on a 1900 Minneapolis directory scan

/// Page with wrapped entries, a widow reference, an ad and cross-references
pub const PAGE_108: &str = "\u{201C}Anderson John, lab, Northwestern Mills, r 2103
Bryant av S
Berg Olaf, carp, b 1710 Cedar av
Acme Goods Co, 500 Main
Mary Jones (wid Rasmus), r 415 Elm
John Smith, clerk, r. 2103 Bryant av. S.

Carlson Anna, dressmkr, rms 215 Nicollet av
Peterson Hans, see also Peterson Jas, r 12 Elm
Hennepin Creamery, 1400 Washington av n: cor 14th
";

/// Continuation page: the first line belongs to an entry from the previous page
pub const PAGE_109: &str = "av S
Lund Peter, student Uni- versity, b 1102 1th av S
Nelson Ole, tailor, r 1820 Lyndale av N Nelson Peter, lab
";

/// First names expected from PAGE_108, in output order
pub const PAGE_108_FIRST_NAMES: &[&str] =
    &["Anderson", "Berg", "Mary", "John", "Carlson", "Peterson"];
