// Panlatin Full Table Data
// Every row of the "all" profile, in the raw data format (0 = no-op)
//
// Row layout: [clear, acute, grave, diaeresis, circumflex, breve, tilde,
// ring, ogonek, special]. A marked letter repeats its base letter's
// siblings so another digit switches the mark, clears back to the base,
// and carries the second-stage target for its own digit when one exists.
//
// Only single-mark letters appear. No digit stands for dot below or horn,
// so stacked forms such as ậ or ờ have no rows and cannot be typed.

pub(crate) const ALL_ROWS: [(u32, [u32; 10]); 229] = [
    // a small letter a
    (0x0061, [0x0000, 0x00E1, 0x00E0, 0x00E4, 0x00E2, 0x0103, 0x00E3, 0x00E5, 0x0105, 0x00E6]),
    // á small letter a with acute
    (0x00E1, [0x0061, 0x0000, 0x00E0, 0x00E4, 0x00E2, 0x0103, 0x00E3, 0x00E5, 0x0105, 0x00E6]),
    // à small letter a with grave
    (0x00E0, [0x0061, 0x00E1, 0x0101, 0x00E4, 0x00E2, 0x0103, 0x00E3, 0x00E5, 0x0105, 0x00E6]),
    // ā small letter a with macron
    (0x0101, [0x0061, 0x00E1, 0x0000, 0x00E4, 0x00E2, 0x0103, 0x00E3, 0x00E5, 0x0105, 0x00E6]),
    // ä small letter a with diaeresis
    (0x00E4, [0x0061, 0x00E1, 0x00E0, 0x0000, 0x00E2, 0x0103, 0x00E3, 0x00E5, 0x0105, 0x00E6]),
    // â small letter a with circumflex
    (0x00E2, [0x0061, 0x00E1, 0x00E0, 0x00E4, 0x0000, 0x0103, 0x00E3, 0x00E5, 0x0105, 0x00E6]),
    // ă small letter a with breve
    (0x0103, [0x0061, 0x00E1, 0x00E0, 0x00E4, 0x00E2, 0x0000, 0x00E3, 0x00E5, 0x0105, 0x00E6]),
    // ã small letter a with tilde
    (0x00E3, [0x0061, 0x00E1, 0x00E0, 0x00E4, 0x00E2, 0x0103, 0x0000, 0x00E5, 0x0105, 0x00E6]),
    // å small letter a with ring above
    (0x00E5, [0x0061, 0x00E1, 0x00E0, 0x00E4, 0x00E2, 0x0103, 0x00E3, 0x0000, 0x0105, 0x00E6]),
    // ą small letter a with ogonek
    (0x0105, [0x0061, 0x00E1, 0x00E0, 0x00E4, 0x00E2, 0x0103, 0x00E3, 0x00E5, 0x0000, 0x00E6]),
    // æ small letter ae
    (0x00E6, [0x0061, 0x00E1, 0x00E0, 0x00E4, 0x00E2, 0x0103, 0x00E3, 0x00E5, 0x0105, 0x0000]),
    // A capital letter a
    (0x0041, [0x0000, 0x00C1, 0x00C0, 0x00C4, 0x00C2, 0x0102, 0x00C3, 0x00C5, 0x0104, 0x00C6]),
    // Á capital letter a with acute
    (0x00C1, [0x0041, 0x0000, 0x00C0, 0x00C4, 0x00C2, 0x0102, 0x00C3, 0x00C5, 0x0104, 0x00C6]),
    // À capital letter a with grave
    (0x00C0, [0x0041, 0x00C1, 0x0100, 0x00C4, 0x00C2, 0x0102, 0x00C3, 0x00C5, 0x0104, 0x00C6]),
    // Ā capital letter a with macron
    (0x0100, [0x0041, 0x00C1, 0x0000, 0x00C4, 0x00C2, 0x0102, 0x00C3, 0x00C5, 0x0104, 0x00C6]),
    // Ä capital letter a with diaeresis
    (0x00C4, [0x0041, 0x00C1, 0x00C0, 0x0000, 0x00C2, 0x0102, 0x00C3, 0x00C5, 0x0104, 0x00C6]),
    // Â capital letter a with circumflex
    (0x00C2, [0x0041, 0x00C1, 0x00C0, 0x00C4, 0x0000, 0x0102, 0x00C3, 0x00C5, 0x0104, 0x00C6]),
    // Ă capital letter a with breve
    (0x0102, [0x0041, 0x00C1, 0x00C0, 0x00C4, 0x00C2, 0x0000, 0x00C3, 0x00C5, 0x0104, 0x00C6]),
    // Ã capital letter a with tilde
    (0x00C3, [0x0041, 0x00C1, 0x00C0, 0x00C4, 0x00C2, 0x0102, 0x0000, 0x00C5, 0x0104, 0x00C6]),
    // Å capital letter a with ring above
    (0x00C5, [0x0041, 0x00C1, 0x00C0, 0x00C4, 0x00C2, 0x0102, 0x00C3, 0x0000, 0x0104, 0x00C6]),
    // Ą capital letter a with ogonek
    (0x0104, [0x0041, 0x00C1, 0x00C0, 0x00C4, 0x00C2, 0x0102, 0x00C3, 0x00C5, 0x0000, 0x00C6]),
    // Æ capital letter ae
    (0x00C6, [0x0041, 0x00C1, 0x00C0, 0x00C4, 0x00C2, 0x0102, 0x00C3, 0x00C5, 0x0104, 0x0000]),
    // c small letter c
    (0x0063, [0x0000, 0x0107, 0x0000, 0x0000, 0x0109, 0x010D, 0x0000, 0x010B, 0x00E7, 0x0000]),
    // ć small letter c with acute
    (0x0107, [0x0063, 0x0000, 0x0000, 0x0000, 0x0109, 0x010D, 0x0000, 0x010B, 0x00E7, 0x0000]),
    // ĉ small letter c with circumflex
    (0x0109, [0x0063, 0x0107, 0x0000, 0x0000, 0x0000, 0x010D, 0x0000, 0x010B, 0x00E7, 0x0000]),
    // č small letter c with caron
    (0x010D, [0x0063, 0x0107, 0x0000, 0x0000, 0x0109, 0x0000, 0x0000, 0x010B, 0x00E7, 0x0000]),
    // ċ small letter c with dot above
    (0x010B, [0x0063, 0x0107, 0x0000, 0x0000, 0x0109, 0x010D, 0x0000, 0x0000, 0x00E7, 0x0000]),
    // ç small letter c with cedilla
    (0x00E7, [0x0063, 0x0107, 0x0000, 0x0000, 0x0109, 0x010D, 0x0000, 0x010B, 0x0000, 0x0000]),
    // C capital letter c
    (0x0043, [0x0000, 0x0106, 0x0000, 0x0000, 0x0108, 0x010C, 0x0000, 0x010A, 0x00C7, 0x0000]),
    // Ć capital letter c with acute
    (0x0106, [0x0043, 0x0000, 0x0000, 0x0000, 0x0108, 0x010C, 0x0000, 0x010A, 0x00C7, 0x0000]),
    // Ĉ capital letter c with circumflex
    (0x0108, [0x0043, 0x0106, 0x0000, 0x0000, 0x0000, 0x010C, 0x0000, 0x010A, 0x00C7, 0x0000]),
    // Č capital letter c with caron
    (0x010C, [0x0043, 0x0106, 0x0000, 0x0000, 0x0108, 0x0000, 0x0000, 0x010A, 0x00C7, 0x0000]),
    // Ċ capital letter c with dot above
    (0x010A, [0x0043, 0x0106, 0x0000, 0x0000, 0x0108, 0x010C, 0x0000, 0x0000, 0x00C7, 0x0000]),
    // Ç capital letter c with cedilla
    (0x00C7, [0x0043, 0x0106, 0x0000, 0x0000, 0x0108, 0x010C, 0x0000, 0x010A, 0x0000, 0x0000]),
    // d small letter d
    (0x0064, [0x0000, 0x0000, 0x0000, 0x0111, 0x0000, 0x010F, 0x0000, 0x0000, 0x0000, 0x00F0]),
    // đ small letter d with stroke
    (0x0111, [0x0064, 0x0000, 0x0000, 0x0000, 0x0000, 0x010F, 0x0000, 0x0000, 0x0000, 0x00F0]),
    // ď small letter d with caron
    (0x010F, [0x0064, 0x0000, 0x0000, 0x0111, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00F0]),
    // ð small letter eth
    (0x00F0, [0x0064, 0x0000, 0x0000, 0x0111, 0x0000, 0x010F, 0x0000, 0x0000, 0x0000, 0x0000]),
    // D capital letter d
    (0x0044, [0x0000, 0x0000, 0x0000, 0x0110, 0x0000, 0x010E, 0x0000, 0x0000, 0x0000, 0x00D0]),
    // Đ capital letter d with stroke
    (0x0110, [0x0044, 0x0000, 0x0000, 0x0000, 0x0000, 0x010E, 0x0000, 0x0000, 0x0000, 0x00D0]),
    // Ď capital letter d with caron
    (0x010E, [0x0044, 0x0000, 0x0000, 0x0110, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00D0]),
    // Ð capital letter eth
    (0x00D0, [0x0044, 0x0000, 0x0000, 0x0110, 0x0000, 0x010E, 0x0000, 0x0000, 0x0000, 0x0000]),
    // e small letter e
    (0x0065, [0x0000, 0x00E9, 0x00E8, 0x00EB, 0x00EA, 0x011B, 0x0000, 0x0117, 0x0119, 0x0000]),
    // é small letter e with acute
    (0x00E9, [0x0065, 0x0000, 0x00E8, 0x00EB, 0x00EA, 0x011B, 0x0000, 0x0117, 0x0119, 0x0000]),
    // è small letter e with grave
    (0x00E8, [0x0065, 0x00E9, 0x0113, 0x00EB, 0x00EA, 0x011B, 0x0000, 0x0117, 0x0119, 0x0000]),
    // ē small letter e with macron
    (0x0113, [0x0065, 0x00E9, 0x0000, 0x00EB, 0x00EA, 0x011B, 0x0000, 0x0117, 0x0119, 0x0000]),
    // ë small letter e with diaeresis
    (0x00EB, [0x0065, 0x00E9, 0x00E8, 0x0000, 0x00EA, 0x011B, 0x0000, 0x0117, 0x0119, 0x0000]),
    // ê small letter e with circumflex
    (0x00EA, [0x0065, 0x00E9, 0x00E8, 0x00EB, 0x0000, 0x011B, 0x0000, 0x0117, 0x0119, 0x0000]),
    // ě small letter e with caron
    (0x011B, [0x0065, 0x00E9, 0x00E8, 0x00EB, 0x00EA, 0x0000, 0x0000, 0x0117, 0x0119, 0x0000]),
    // ė small letter e with dot above
    (0x0117, [0x0065, 0x00E9, 0x00E8, 0x00EB, 0x00EA, 0x011B, 0x0000, 0x0000, 0x0119, 0x0000]),
    // ę small letter e with ogonek
    (0x0119, [0x0065, 0x00E9, 0x00E8, 0x00EB, 0x00EA, 0x011B, 0x0000, 0x0117, 0x0000, 0x0000]),
    // E capital letter e
    (0x0045, [0x0000, 0x00C9, 0x00C8, 0x00CB, 0x00CA, 0x011A, 0x0000, 0x0116, 0x0118, 0x0000]),
    // É capital letter e with acute
    (0x00C9, [0x0045, 0x0000, 0x00C8, 0x00CB, 0x00CA, 0x011A, 0x0000, 0x0116, 0x0118, 0x0000]),
    // È capital letter e with grave
    (0x00C8, [0x0045, 0x00C9, 0x0112, 0x00CB, 0x00CA, 0x011A, 0x0000, 0x0116, 0x0118, 0x0000]),
    // Ē capital letter e with macron
    (0x0112, [0x0045, 0x00C9, 0x0000, 0x00CB, 0x00CA, 0x011A, 0x0000, 0x0116, 0x0118, 0x0000]),
    // Ë capital letter e with diaeresis
    (0x00CB, [0x0045, 0x00C9, 0x00C8, 0x0000, 0x00CA, 0x011A, 0x0000, 0x0116, 0x0118, 0x0000]),
    // Ê capital letter e with circumflex
    (0x00CA, [0x0045, 0x00C9, 0x00C8, 0x00CB, 0x0000, 0x011A, 0x0000, 0x0116, 0x0118, 0x0000]),
    // Ě capital letter e with caron
    (0x011A, [0x0045, 0x00C9, 0x00C8, 0x00CB, 0x00CA, 0x0000, 0x0000, 0x0116, 0x0118, 0x0000]),
    // Ė capital letter e with dot above
    (0x0116, [0x0045, 0x00C9, 0x00C8, 0x00CB, 0x00CA, 0x011A, 0x0000, 0x0000, 0x0118, 0x0000]),
    // Ę capital letter e with ogonek
    (0x0118, [0x0045, 0x00C9, 0x00C8, 0x00CB, 0x00CA, 0x011A, 0x0000, 0x0116, 0x0000, 0x0000]),
    // g small letter g
    (0x0067, [0x0000, 0x0000, 0x0000, 0x0000, 0x011D, 0x011F, 0x0000, 0x0121, 0x0123, 0x0000]),
    // ĝ small letter g with circumflex
    (0x011D, [0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x011F, 0x0000, 0x0121, 0x0123, 0x0000]),
    // ğ small letter g with breve
    (0x011F, [0x0067, 0x0000, 0x0000, 0x0000, 0x011D, 0x0000, 0x0000, 0x0121, 0x0123, 0x0000]),
    // ġ small letter g with dot above
    (0x0121, [0x0067, 0x0000, 0x0000, 0x0000, 0x011D, 0x011F, 0x0000, 0x0000, 0x0123, 0x0000]),
    // ģ small letter g with cedilla
    (0x0123, [0x0067, 0x0000, 0x0000, 0x0000, 0x011D, 0x011F, 0x0000, 0x0121, 0x0000, 0x0000]),
    // G capital letter g
    (0x0047, [0x0000, 0x0000, 0x0000, 0x0000, 0x011C, 0x011E, 0x0000, 0x0120, 0x0122, 0x0000]),
    // Ĝ capital letter g with circumflex
    (0x011C, [0x0047, 0x0000, 0x0000, 0x0000, 0x0000, 0x011E, 0x0000, 0x0120, 0x0122, 0x0000]),
    // Ğ capital letter g with breve
    (0x011E, [0x0047, 0x0000, 0x0000, 0x0000, 0x011C, 0x0000, 0x0000, 0x0120, 0x0122, 0x0000]),
    // Ġ capital letter g with dot above
    (0x0120, [0x0047, 0x0000, 0x0000, 0x0000, 0x011C, 0x011E, 0x0000, 0x0000, 0x0122, 0x0000]),
    // Ģ capital letter g with cedilla
    (0x0122, [0x0047, 0x0000, 0x0000, 0x0000, 0x011C, 0x011E, 0x0000, 0x0120, 0x0000, 0x0000]),
    // h small letter h
    (0x0068, [0x0000, 0x0000, 0x0000, 0x0127, 0x0125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ħ small letter h with stroke
    (0x0127, [0x0068, 0x0000, 0x0000, 0x0000, 0x0125, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ĥ small letter h with circumflex
    (0x0125, [0x0068, 0x0000, 0x0000, 0x0127, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // H capital letter h
    (0x0048, [0x0000, 0x0000, 0x0000, 0x0126, 0x0124, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ħ capital letter h with stroke
    (0x0126, [0x0048, 0x0000, 0x0000, 0x0000, 0x0124, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ĥ capital letter h with circumflex
    (0x0124, [0x0048, 0x0000, 0x0000, 0x0126, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // i small letter i
    (0x0069, [0x0131, 0x00ED, 0x00EC, 0x00EF, 0x00EE, 0x0000, 0x0129, 0x0000, 0x012F, 0x0000]),
    // ı small letter dotless i
    (0x0131, [0x0069, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0069, 0x0000, 0x0000]),
    // í small letter i with acute
    (0x00ED, [0x0069, 0x0000, 0x00EC, 0x00EF, 0x00EE, 0x0000, 0x0129, 0x0000, 0x012F, 0x0000]),
    // ì small letter i with grave
    (0x00EC, [0x0069, 0x00ED, 0x012B, 0x00EF, 0x00EE, 0x0000, 0x0129, 0x0000, 0x012F, 0x0000]),
    // ī small letter i with macron
    (0x012B, [0x0069, 0x00ED, 0x0000, 0x00EF, 0x00EE, 0x0000, 0x0129, 0x0000, 0x012F, 0x0000]),
    // ï small letter i with diaeresis
    (0x00EF, [0x0069, 0x00ED, 0x00EC, 0x0000, 0x00EE, 0x0000, 0x0129, 0x0000, 0x012F, 0x0000]),
    // î small letter i with circumflex
    (0x00EE, [0x0069, 0x00ED, 0x00EC, 0x00EF, 0x0000, 0x0000, 0x0129, 0x0000, 0x012F, 0x0000]),
    // ĩ small letter i with tilde
    (0x0129, [0x0069, 0x00ED, 0x00EC, 0x00EF, 0x00EE, 0x0000, 0x0000, 0x0000, 0x012F, 0x0000]),
    // į small letter i with ogonek
    (0x012F, [0x0069, 0x00ED, 0x00EC, 0x00EF, 0x00EE, 0x0000, 0x0129, 0x0000, 0x0000, 0x0000]),
    // I capital letter i
    (0x0049, [0x0000, 0x00CD, 0x00CC, 0x00CF, 0x00CE, 0x0000, 0x0128, 0x0130, 0x012E, 0x0000]),
    // Í capital letter i with acute
    (0x00CD, [0x0049, 0x0000, 0x00CC, 0x00CF, 0x00CE, 0x0000, 0x0128, 0x0130, 0x012E, 0x0000]),
    // Ì capital letter i with grave
    (0x00CC, [0x0049, 0x00CD, 0x012A, 0x00CF, 0x00CE, 0x0000, 0x0128, 0x0130, 0x012E, 0x0000]),
    // Ī capital letter i with macron
    (0x012A, [0x0049, 0x00CD, 0x0000, 0x00CF, 0x00CE, 0x0000, 0x0128, 0x0130, 0x012E, 0x0000]),
    // Ï capital letter i with diaeresis
    (0x00CF, [0x0049, 0x00CD, 0x00CC, 0x0000, 0x00CE, 0x0000, 0x0128, 0x0130, 0x012E, 0x0000]),
    // Î capital letter i with circumflex
    (0x00CE, [0x0049, 0x00CD, 0x00CC, 0x00CF, 0x0000, 0x0000, 0x0128, 0x0130, 0x012E, 0x0000]),
    // Ĩ capital letter i with tilde
    (0x0128, [0x0049, 0x00CD, 0x00CC, 0x00CF, 0x00CE, 0x0000, 0x0000, 0x0130, 0x012E, 0x0000]),
    // İ capital letter i with dot above
    (0x0130, [0x0049, 0x00CD, 0x00CC, 0x00CF, 0x00CE, 0x0000, 0x0128, 0x0000, 0x012E, 0x0000]),
    // Į capital letter i with ogonek
    (0x012E, [0x0049, 0x00CD, 0x00CC, 0x00CF, 0x00CE, 0x0000, 0x0128, 0x0130, 0x0000, 0x0000]),
    // j small letter j
    (0x006A, [0x0000, 0x0000, 0x0000, 0x0000, 0x0135, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ĵ small letter j with circumflex
    (0x0135, [0x006A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // J capital letter j
    (0x004A, [0x0000, 0x0000, 0x0000, 0x0000, 0x0134, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ĵ capital letter j with circumflex
    (0x0134, [0x004A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // k small letter k
    (0x006B, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0137, 0x0000]),
    // ķ small letter k with cedilla
    (0x0137, [0x006B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // K capital letter k
    (0x004B, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0136, 0x0000]),
    // Ķ capital letter k with cedilla
    (0x0136, [0x004B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // l small letter l
    (0x006C, [0x0000, 0x013A, 0x0000, 0x0142, 0x0000, 0x013E, 0x0000, 0x0000, 0x013C, 0x0000]),
    // ĺ small letter l with acute
    (0x013A, [0x006C, 0x0000, 0x0000, 0x0142, 0x0000, 0x013E, 0x0000, 0x0000, 0x013C, 0x0000]),
    // ł small letter l with stroke
    (0x0142, [0x006C, 0x013A, 0x0000, 0x0000, 0x0000, 0x013E, 0x0000, 0x0000, 0x013C, 0x0000]),
    // ľ small letter l with caron
    (0x013E, [0x006C, 0x013A, 0x0000, 0x0142, 0x0000, 0x0000, 0x0000, 0x0000, 0x013C, 0x0000]),
    // ļ small letter l with cedilla
    (0x013C, [0x006C, 0x013A, 0x0000, 0x0142, 0x0000, 0x013E, 0x0000, 0x0000, 0x0000, 0x0000]),
    // L capital letter l
    (0x004C, [0x0000, 0x0139, 0x0000, 0x0141, 0x0000, 0x013D, 0x0000, 0x0000, 0x013B, 0x0000]),
    // Ĺ capital letter l with acute
    (0x0139, [0x004C, 0x0000, 0x0000, 0x0141, 0x0000, 0x013D, 0x0000, 0x0000, 0x013B, 0x0000]),
    // Ł capital letter l with stroke
    (0x0141, [0x004C, 0x0139, 0x0000, 0x0000, 0x0000, 0x013D, 0x0000, 0x0000, 0x013B, 0x0000]),
    // Ľ capital letter l with caron
    (0x013D, [0x004C, 0x0139, 0x0000, 0x0141, 0x0000, 0x0000, 0x0000, 0x0000, 0x013B, 0x0000]),
    // Ļ capital letter l with cedilla
    (0x013B, [0x004C, 0x0139, 0x0000, 0x0141, 0x0000, 0x013D, 0x0000, 0x0000, 0x0000, 0x0000]),
    // n small letter n
    (0x006E, [0x0000, 0x0144, 0x0000, 0x0000, 0x0000, 0x0148, 0x00F1, 0x1E45, 0x0146, 0x0000]),
    // ń small letter n with acute
    (0x0144, [0x006E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0148, 0x00F1, 0x1E45, 0x0146, 0x0000]),
    // ň small letter n with caron
    (0x0148, [0x006E, 0x0144, 0x0000, 0x0000, 0x0000, 0x0000, 0x00F1, 0x1E45, 0x0146, 0x0000]),
    // ñ small letter n with tilde
    (0x00F1, [0x006E, 0x0144, 0x0000, 0x0000, 0x0000, 0x0148, 0x0000, 0x1E45, 0x0146, 0x0000]),
    // ṅ small letter n with dot above
    (0x1E45, [0x006E, 0x0144, 0x0000, 0x0000, 0x0000, 0x0148, 0x00F1, 0x0000, 0x0146, 0x0000]),
    // ņ small letter n with cedilla
    (0x0146, [0x006E, 0x0144, 0x0000, 0x0000, 0x0000, 0x0148, 0x00F1, 0x1E45, 0x0000, 0x0000]),
    // N capital letter n
    (0x004E, [0x0000, 0x0143, 0x0000, 0x0000, 0x0000, 0x0147, 0x00D1, 0x1E44, 0x0145, 0x0000]),
    // Ń capital letter n with acute
    (0x0143, [0x004E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0147, 0x00D1, 0x1E44, 0x0145, 0x0000]),
    // Ň capital letter n with caron
    (0x0147, [0x004E, 0x0143, 0x0000, 0x0000, 0x0000, 0x0000, 0x00D1, 0x1E44, 0x0145, 0x0000]),
    // Ñ capital letter n with tilde
    (0x00D1, [0x004E, 0x0143, 0x0000, 0x0000, 0x0000, 0x0147, 0x0000, 0x1E44, 0x0145, 0x0000]),
    // Ṅ capital letter n with dot above
    (0x1E44, [0x004E, 0x0143, 0x0000, 0x0000, 0x0000, 0x0147, 0x00D1, 0x0000, 0x0145, 0x0000]),
    // Ņ capital letter n with cedilla
    (0x0145, [0x004E, 0x0143, 0x0000, 0x0000, 0x0000, 0x0147, 0x00D1, 0x1E44, 0x0000, 0x0000]),
    // o small letter o
    (0x006F, [0x0000, 0x00F3, 0x00F2, 0x00F6, 0x00F4, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // ó small letter o with acute
    (0x00F3, [0x006F, 0x0151, 0x00F2, 0x00F6, 0x00F4, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // ő small letter o with double acute
    (0x0151, [0x006F, 0x0000, 0x00F2, 0x00F6, 0x00F4, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // ò small letter o with grave
    (0x00F2, [0x006F, 0x00F3, 0x014D, 0x00F6, 0x00F4, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // ō small letter o with macron
    (0x014D, [0x006F, 0x00F3, 0x0000, 0x00F6, 0x00F4, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // ö small letter o with diaeresis
    (0x00F6, [0x006F, 0x00F3, 0x00F2, 0x0000, 0x00F4, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // ô small letter o with circumflex
    (0x00F4, [0x006F, 0x00F3, 0x00F2, 0x00F6, 0x0000, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // ø small letter o with stroke
    (0x00F8, [0x006F, 0x00F3, 0x00F2, 0x00F6, 0x00F4, 0x0000, 0x00F5, 0x0000, 0x0000, 0x0153]),
    // õ small letter o with tilde
    (0x00F5, [0x006F, 0x00F3, 0x00F2, 0x00F6, 0x00F4, 0x00F8, 0x0000, 0x0000, 0x0000, 0x0153]),
    // œ small ligature oe
    (0x0153, [0x006F, 0x00F3, 0x00F2, 0x00F6, 0x00F4, 0x00F8, 0x00F5, 0x0000, 0x0000, 0x0000]),
    // O capital letter o
    (0x004F, [0x0000, 0x00D3, 0x00D2, 0x00D6, 0x00D4, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Ó capital letter o with acute
    (0x00D3, [0x004F, 0x0150, 0x00D2, 0x00D6, 0x00D4, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Ő capital letter o with double acute
    (0x0150, [0x004F, 0x0000, 0x00D2, 0x00D6, 0x00D4, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Ò capital letter o with grave
    (0x00D2, [0x004F, 0x00D3, 0x014C, 0x00D6, 0x00D4, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Ō capital letter o with macron
    (0x014C, [0x004F, 0x00D3, 0x0000, 0x00D6, 0x00D4, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Ö capital letter o with diaeresis
    (0x00D6, [0x004F, 0x00D3, 0x00D2, 0x0000, 0x00D4, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Ô capital letter o with circumflex
    (0x00D4, [0x004F, 0x00D3, 0x00D2, 0x00D6, 0x0000, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Ø capital letter o with stroke
    (0x00D8, [0x004F, 0x00D3, 0x00D2, 0x00D6, 0x00D4, 0x0000, 0x00D5, 0x0000, 0x0000, 0x0152]),
    // Õ capital letter o with tilde
    (0x00D5, [0x004F, 0x00D3, 0x00D2, 0x00D6, 0x00D4, 0x00D8, 0x0000, 0x0000, 0x0000, 0x0152]),
    // Œ capital ligature oe
    (0x0152, [0x004F, 0x00D3, 0x00D2, 0x00D6, 0x00D4, 0x00D8, 0x00D5, 0x0000, 0x0000, 0x0000]),
    // r small letter r
    (0x0072, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0159, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ř small letter r with caron
    (0x0159, [0x0072, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // R capital letter r
    (0x0052, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0158, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ř capital letter r with caron
    (0x0158, [0x0052, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // s small letter s
    (0x0073, [0x0000, 0x015B, 0x0000, 0x0000, 0x015D, 0x0161, 0x0219, 0x0000, 0x015F, 0x00DF]),
    // ś small letter s with acute
    (0x015B, [0x0073, 0x0000, 0x0000, 0x0000, 0x015D, 0x0161, 0x0219, 0x0000, 0x015F, 0x00DF]),
    // ŝ small letter s with circumflex
    (0x015D, [0x0073, 0x015B, 0x0000, 0x0000, 0x0000, 0x0161, 0x0219, 0x0000, 0x015F, 0x00DF]),
    // š small letter s with caron
    (0x0161, [0x0073, 0x015B, 0x0000, 0x0000, 0x015D, 0x0000, 0x0219, 0x0000, 0x015F, 0x00DF]),
    // ș small letter s with comma below
    (0x0219, [0x0073, 0x015B, 0x0000, 0x0000, 0x015D, 0x0161, 0x0000, 0x0000, 0x015F, 0x00DF]),
    // ş small letter s with cedilla
    (0x015F, [0x0073, 0x015B, 0x0000, 0x0000, 0x015D, 0x0161, 0x0219, 0x0000, 0x0000, 0x00DF]),
    // ß small letter sharp s
    (0x00DF, [0x0073, 0x015B, 0x0000, 0x0000, 0x015D, 0x0161, 0x0219, 0x0000, 0x015F, 0x0000]),
    // S capital letter s
    (0x0053, [0x0000, 0x015A, 0x0000, 0x0000, 0x015C, 0x0160, 0x0218, 0x0000, 0x015E, 0x1E9E]),
    // Ś capital letter s with acute
    (0x015A, [0x0053, 0x0000, 0x0000, 0x0000, 0x015C, 0x0160, 0x0218, 0x0000, 0x015E, 0x1E9E]),
    // Ŝ capital letter s with circumflex
    (0x015C, [0x0053, 0x015A, 0x0000, 0x0000, 0x0000, 0x0160, 0x0218, 0x0000, 0x015E, 0x1E9E]),
    // Š capital letter s with caron
    (0x0160, [0x0053, 0x015A, 0x0000, 0x0000, 0x015C, 0x0000, 0x0218, 0x0000, 0x015E, 0x1E9E]),
    // Ș capital letter s with comma below
    (0x0218, [0x0053, 0x015A, 0x0000, 0x0000, 0x015C, 0x0160, 0x0000, 0x0000, 0x015E, 0x1E9E]),
    // Ş capital letter s with cedilla
    (0x015E, [0x0053, 0x015A, 0x0000, 0x0000, 0x015C, 0x0160, 0x0218, 0x0000, 0x0000, 0x1E9E]),
    // ẞ capital letter sharp s
    (0x1E9E, [0x0053, 0x015A, 0x0000, 0x0000, 0x015C, 0x0160, 0x0218, 0x0000, 0x015E, 0x0000]),
    // t small letter t
    (0x0074, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0165, 0x021B, 0x0000, 0x0000, 0x00FE]),
    // ť small letter t with caron
    (0x0165, [0x0074, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x021B, 0x0000, 0x0000, 0x00FE]),
    // ț small letter t with comma below
    (0x021B, [0x0074, 0x0000, 0x0000, 0x0000, 0x0000, 0x0165, 0x0000, 0x0000, 0x0000, 0x00FE]),
    // þ small letter thorn
    (0x00FE, [0x0074, 0x0000, 0x0000, 0x0000, 0x0000, 0x0165, 0x021B, 0x0000, 0x0000, 0x0000]),
    // T capital letter t
    (0x0054, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0164, 0x021A, 0x0000, 0x0000, 0x00DE]),
    // Ť capital letter t with caron
    (0x0164, [0x0054, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x021A, 0x0000, 0x0000, 0x00DE]),
    // Ț capital letter t with comma below
    (0x021A, [0x0054, 0x0000, 0x0000, 0x0000, 0x0000, 0x0164, 0x0000, 0x0000, 0x0000, 0x00DE]),
    // Þ capital letter thorn
    (0x00DE, [0x0054, 0x0000, 0x0000, 0x0000, 0x0000, 0x0164, 0x021A, 0x0000, 0x0000, 0x0000]),
    // u small letter u
    (0x0075, [0x0000, 0x00FA, 0x00F9, 0x00FC, 0x00FB, 0x016D, 0x0169, 0x016F, 0x0173, 0x0000]),
    // ú small letter u with acute
    (0x00FA, [0x0075, 0x0171, 0x00F9, 0x00FC, 0x00FB, 0x016D, 0x0169, 0x016F, 0x0173, 0x0000]),
    // ű small letter u with double acute
    (0x0171, [0x0075, 0x0000, 0x00F9, 0x00FC, 0x00FB, 0x016D, 0x0169, 0x016F, 0x0173, 0x0000]),
    // ù small letter u with grave
    (0x00F9, [0x0075, 0x00FA, 0x016B, 0x00FC, 0x00FB, 0x016D, 0x0169, 0x016F, 0x0173, 0x0000]),
    // ū small letter u with macron
    (0x016B, [0x0075, 0x00FA, 0x0000, 0x00FC, 0x00FB, 0x016D, 0x0169, 0x016F, 0x0173, 0x0000]),
    // ü small letter u with diaeresis
    (0x00FC, [0x0075, 0x00FA, 0x00F9, 0x0000, 0x00FB, 0x016D, 0x0169, 0x016F, 0x0173, 0x0000]),
    // û small letter u with circumflex
    (0x00FB, [0x0075, 0x00FA, 0x00F9, 0x00FC, 0x0000, 0x016D, 0x0169, 0x016F, 0x0173, 0x0000]),
    // ŭ small letter u with breve
    (0x016D, [0x0075, 0x00FA, 0x00F9, 0x00FC, 0x00FB, 0x0000, 0x0169, 0x016F, 0x0173, 0x0000]),
    // ũ small letter u with tilde
    (0x0169, [0x0075, 0x00FA, 0x00F9, 0x00FC, 0x00FB, 0x016D, 0x0000, 0x016F, 0x0173, 0x0000]),
    // ů small letter u with ring above
    (0x016F, [0x0075, 0x00FA, 0x00F9, 0x00FC, 0x00FB, 0x016D, 0x0169, 0x0000, 0x0173, 0x0000]),
    // ų small letter u with ogonek
    (0x0173, [0x0075, 0x00FA, 0x00F9, 0x00FC, 0x00FB, 0x016D, 0x0169, 0x016F, 0x0000, 0x0000]),
    // U capital letter u
    (0x0055, [0x0000, 0x00DA, 0x00D9, 0x00DC, 0x00DB, 0x016C, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Ú capital letter u with acute
    (0x00DA, [0x0055, 0x0170, 0x00D9, 0x00DC, 0x00DB, 0x016C, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Ű capital letter u with double acute
    (0x0170, [0x0055, 0x0000, 0x00D9, 0x00DC, 0x00DB, 0x016C, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Ù capital letter u with grave
    (0x00D9, [0x0055, 0x00DA, 0x016A, 0x00DC, 0x00DB, 0x016C, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Ū capital letter u with macron
    (0x016A, [0x0055, 0x00DA, 0x0000, 0x00DC, 0x00DB, 0x016C, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Ü capital letter u with diaeresis
    (0x00DC, [0x0055, 0x00DA, 0x00D9, 0x0000, 0x00DB, 0x016C, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Û capital letter u with circumflex
    (0x00DB, [0x0055, 0x00DA, 0x00D9, 0x00DC, 0x0000, 0x016C, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Ŭ capital letter u with breve
    (0x016C, [0x0055, 0x00DA, 0x00D9, 0x00DC, 0x00DB, 0x0000, 0x0168, 0x016E, 0x0172, 0x0000]),
    // Ũ capital letter u with tilde
    (0x0168, [0x0055, 0x00DA, 0x00D9, 0x00DC, 0x00DB, 0x016C, 0x0000, 0x016E, 0x0172, 0x0000]),
    // Ů capital letter u with ring above
    (0x016E, [0x0055, 0x00DA, 0x00D9, 0x00DC, 0x00DB, 0x016C, 0x0168, 0x0000, 0x0172, 0x0000]),
    // Ų capital letter u with ogonek
    (0x0172, [0x0055, 0x00DA, 0x00D9, 0x00DC, 0x00DB, 0x016C, 0x0168, 0x016E, 0x0000, 0x0000]),
    // w small letter w
    (0x0077, [0x0000, 0x1E83, 0x1E81, 0x1E85, 0x0175, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ẃ small letter w with acute
    (0x1E83, [0x0077, 0x0000, 0x1E81, 0x1E85, 0x0175, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ẁ small letter w with grave
    (0x1E81, [0x0077, 0x1E83, 0x0000, 0x1E85, 0x0175, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ẅ small letter w with diaeresis
    (0x1E85, [0x0077, 0x1E83, 0x1E81, 0x0000, 0x0175, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ŵ small letter w with circumflex
    (0x0175, [0x0077, 0x1E83, 0x1E81, 0x1E85, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // W capital letter w
    (0x0057, [0x0000, 0x1E82, 0x1E80, 0x1E84, 0x0174, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ẃ capital letter w with acute
    (0x1E82, [0x0057, 0x0000, 0x1E80, 0x1E84, 0x0174, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ẁ capital letter w with grave
    (0x1E80, [0x0057, 0x1E82, 0x0000, 0x1E84, 0x0174, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ẅ capital letter w with diaeresis
    (0x1E84, [0x0057, 0x1E82, 0x1E80, 0x0000, 0x0174, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ŵ capital letter w with circumflex
    (0x0174, [0x0057, 0x1E82, 0x1E80, 0x1E84, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // y small letter y
    (0x0079, [0x0000, 0x00FD, 0x1EF3, 0x00FF, 0x0177, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ý small letter y with acute
    (0x00FD, [0x0079, 0x0000, 0x1EF3, 0x00FF, 0x0177, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ỳ small letter y with grave
    (0x1EF3, [0x0079, 0x00FD, 0x0000, 0x00FF, 0x0177, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ÿ small letter y with diaeresis
    (0x00FF, [0x0079, 0x00FD, 0x1EF3, 0x0000, 0x0177, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ŷ small letter y with circumflex
    (0x0177, [0x0079, 0x00FD, 0x1EF3, 0x00FF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Y capital letter y
    (0x0059, [0x0000, 0x00DD, 0x1EF2, 0x0178, 0x0176, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ý capital letter y with acute
    (0x00DD, [0x0059, 0x0000, 0x1EF2, 0x0178, 0x0176, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ỳ capital letter y with grave
    (0x1EF2, [0x0059, 0x00DD, 0x0000, 0x0178, 0x0176, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ÿ capital letter y with diaeresis
    (0x0178, [0x0059, 0x00DD, 0x1EF2, 0x0000, 0x0176, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Ŷ capital letter y with circumflex
    (0x0176, [0x0059, 0x00DD, 0x1EF2, 0x0178, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // z small letter z
    (0x007A, [0x0000, 0x017A, 0x0000, 0x0000, 0x0000, 0x017E, 0x0000, 0x017C, 0x0000, 0x0000]),
    // ź small letter z with acute
    (0x017A, [0x007A, 0x0000, 0x0000, 0x0000, 0x0000, 0x017E, 0x0000, 0x017C, 0x0000, 0x0000]),
    // ž small letter z with caron
    (0x017E, [0x007A, 0x017A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x017C, 0x0000, 0x0000]),
    // ż small letter z with dot above
    (0x017C, [0x007A, 0x017A, 0x0000, 0x0000, 0x0000, 0x017E, 0x0000, 0x0000, 0x0000, 0x0000]),
    // Z capital letter z
    (0x005A, [0x0000, 0x0179, 0x0000, 0x0000, 0x0000, 0x017D, 0x0000, 0x017B, 0x0000, 0x0000]),
    // Ź capital letter z with acute
    (0x0179, [0x005A, 0x0000, 0x0000, 0x0000, 0x0000, 0x017D, 0x0000, 0x017B, 0x0000, 0x0000]),
    // Ž capital letter z with caron
    (0x017D, [0x005A, 0x0179, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x017B, 0x0000, 0x0000]),
    // Ż capital letter z with dot above
    (0x017B, [0x005A, 0x0179, 0x0000, 0x0000, 0x0000, 0x017D, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ! exclamation mark
    (0x0021, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00A1]),
    // ¡ inverted exclamation mark
    (0x00A1, [0x0021, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // < less-than sign
    (0x003C, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00AB]),
    // « left-pointing double angle quotation mark
    (0x00AB, [0x003C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // > greater-than sign
    (0x003E, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00BB]),
    // » right-pointing double angle quotation mark
    (0x00BB, [0x003E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // ? question mark
    (0x003F, [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00BF]),
    // ¿ inverted question mark
    (0x00BF, [0x003F, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    // \ reverse solidus (escape: digits become literal digits)
    (0x005C, [0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039]),
];
