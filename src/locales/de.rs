//! German strings.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("postbox-text", "Kommentar hier eingeben (mindestens 3 Zeichen)"),
    ("postbox-author", "Name (optional)"),
    ("postbox-email", "E-Mail (optional)"),
    ("postbox-website", "Website (optional)"),
    ("postbox-preview", "Vorschau"),
    ("postbox-edit", "Bearbeiten"),
    ("postbox-submit", "Abschicken"),
    (
        "postbox-notification",
        "wenn auf meinen Kommentar geantwortet wird, möchte ich eine E-Mail bekommen",
    ),
    ("num-comments", "1 Kommentar\n{{ n }} Kommentare"),
    ("no-comments", "Bisher keine Kommentare"),
    ("comment-reply", "Antworten"),
    ("comment-edit", "Bearbeiten"),
    ("comment-save", "Speichern"),
    ("comment-delete", "Löschen"),
    ("comment-confirm", "Bestätigen"),
    ("comment-close", "Schließen"),
    ("comment-cancel", "Abbrechen"),
    ("comment-deleted", "Kommentar gelöscht."),
    ("comment-queued", "Kommentar muss noch freigeschaltet werden."),
    ("comment-anonymous", "Anonym"),
    // "versteckt" does not inflect, both forms read the same.
    ("comment-hidden", "{{ n }} versteckt\n{{ n }} versteckt"),
    ("date-now", "eben gerade"),
    ("date-minute", "vor einer Minute\nvor {{ n }} Minuten"),
    ("date-hour", "vor einer Stunde\nvor {{ n }} Stunden"),
    ("date-day", "Gestern\nvor {{ n }} Tagen"),
    ("date-week", "letzte Woche\nvor {{ n }} Wochen"),
    ("date-month", "letzten Monat\nvor {{ n }} Monaten"),
    ("date-year", "letztes Jahr\nvor {{ n }} Jahren"),
];
