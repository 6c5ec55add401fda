//! Serialize an export document to a GPIF element tree
//!
//! Element order inside each block follows what Guitar Pro expects. Several
//! notation features are not exported yet (chords, ties, bends, harmonics,
//! alternate endings, directions, fermatas, articulations); they are left out
//! of the output rather than treated as errors.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::Display;

use super::document::{
    Bar, BarId, Beat, BeatId, ClefType, Document, MasterBar, Note, NoteId, Pitch, Rhythm,
    RhythmId, ScoreInfo, Track, Voice, VoiceId,
};
use super::xml::{XmlDocument, XmlElement};
use super::ExportError;

/// Version written to the GPVersion element
pub const GP_VERSION: &str = "7.6.0";

lazy_static! {
    static ref NOTE_VALUE_NAMES: HashMap<i32, &'static str> = HashMap::from([
        (1, "Whole"),
        (2, "Half"),
        (4, "Quarter"),
        (8, "Eighth"),
        (16, "16th"),
        (32, "32nd"),
        (64, "64th"),
    ]);
}

/// Look up the GPIF note value name for a duration denominator
pub fn note_value_name(duration: i32) -> Result<&'static str, ExportError> {
    NOTE_VALUE_NAMES
        .get(&duration)
        .copied()
        .ok_or(ExportError::UnsupportedDuration(duration))
}

/// Add a node whose content is a CDATA section
fn add_cdata_node(node: &mut XmlElement, name: &str, value: &str) {
    node.append_child(name).append_cdata(value);
}

/// Add a node with plain character data
fn add_value_node(node: &mut XmlElement, name: &str, value: impl ToString) {
    node.append_child(name).append_text(value.to_string());
}

fn list_to_string<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn save_score_info(node: &mut XmlElement, info: &ScoreInfo) {
    add_cdata_node(node, "Title", &info.title);
    add_cdata_node(node, "SubTitle", &info.subtitle);
    add_cdata_node(node, "Artist", &info.artist);
    add_cdata_node(node, "Album", &info.album);
    add_cdata_node(node, "Words", &info.words);
    add_cdata_node(node, "Music", &info.music);
    add_cdata_node(node, "Copyright", &info.copyright);
    add_cdata_node(node, "Tabber", &info.tabber);
    add_cdata_node(node, "Instructions", &info.instructions);
    add_cdata_node(node, "Notices", &info.notices);
}

fn save_tracks(gpif: &mut XmlElement, tracks: &[Track]) {
    // Track ids are positional.
    let ids: Vec<usize> = (0..tracks.len()).collect();
    let master_track = gpif.append_child("MasterTrack");
    add_value_node(master_track, "Tracks", list_to_string(&ids));

    let tracks_node = gpif.append_child("Tracks");
    for (track_idx, track) in tracks.iter().enumerate() {
        let track_node = tracks_node.append_child("Track");
        track_node.set_attribute("id", track_idx);

        add_cdata_node(track_node, "Name", &track.name);

        // Without an instrument type the track is read as a drum track.
        // Basses are exported as guitars too.
        let inst_set = track_node.append_child("InstrumentSet");
        add_value_node(inst_set, "Type", "electricGuitar");
        add_value_node(inst_set, "LineCount", 5);

        let sounds_node = track_node.append_child("Sounds");
        for sound in &track.sounds {
            let sound_node = sounds_node.append_child("Sound");
            add_cdata_node(sound_node, "Name", &sound.label);
            add_cdata_node(sound_node, "Label", &sound.label);

            let midi_node = sound_node.append_child("MIDI");
            add_value_node(midi_node, "LSB", 0);
            add_value_node(midi_node, "MSB", 0);
            add_value_node(midi_node, "Program", sound.midi_preset);
        }

        add_value_node(track_node, "AudioEngineState", "MIDI");

        let staves_node = track_node.append_child("Staves");
        for staff in &track.staves {
            let props_node = staves_node.append_child("Staff").append_child("Properties");

            let capo = props_node.append_child("Property");
            capo.set_attribute("name", "CapoFret");
            add_value_node(capo, "Fret", staff.capo);

            let tuning = props_node.append_child("Property");
            tuning.set_attribute("name", "Tuning");
            add_value_node(tuning, "Pitches", list_to_string(&staff.tuning));
        }

        // Standard notation pitches are stored an octave higher than they sound.
        let transpose = track_node.append_child("Transpose");
        add_value_node(transpose, "Chromatic", 0);
        add_value_node(transpose, "Octave", -1);
    }
}

fn save_master_bars(gpif: &mut XmlElement, master_bars: &[MasterBar]) {
    let bars_node = gpif.append_child("MasterBars");

    for master_bar in master_bars {
        let bar_node = bars_node.append_child("MasterBar");

        add_value_node(bar_node, "Bars", list_to_string(&master_bar.bar_ids));

        if let Some(section) = &master_bar.section {
            let section_node = bar_node.append_child("Section");
            add_value_node(section_node, "Letter", &section.letter);
            add_value_node(section_node, "Text", &section.text);
        }

        let time_sig = format!(
            "{}/{}",
            master_bar.time_signature.beats, master_bar.time_signature.beat_value
        );
        add_value_node(bar_node, "Time", time_sig);

        let key_sig = &master_bar.key_signature;
        let accidentals = if key_sig.sharps {
            key_sig.accidental_count
        } else {
            -key_sig.accidental_count
        };
        let key_node = bar_node.append_child("Key");
        add_value_node(key_node, "AccidentalCount", accidentals);
        add_value_node(key_node, "Mode", if key_sig.minor { "Minor" } else { "Major" });

        if master_bar.double_bar {
            bar_node.append_child("DoubleBar");
        }
        if master_bar.free_time {
            bar_node.append_child("FreeTime");
        }

        if master_bar.repeat_start || master_bar.repeat_end {
            bar_node
                .append_child("Repeat")
                .set_attribute("start", master_bar.repeat_start)
                .set_attribute("end", master_bar.repeat_end)
                .set_attribute("count", master_bar.repeat_count);
        }
    }
}

fn save_bars<'a>(gpif: &mut XmlElement, bars: impl Iterator<Item = (&'a BarId, &'a Bar)>) {
    let bars_node = gpif.append_child("Bars");

    for (id, bar) in bars {
        let bar_node = bars_node.append_child("Bar");
        bar_node.set_attribute("id", id);

        // Only treble and bass clefs are exported.
        let clef = match bar.clef {
            ClefType::F4 => "F4",
            _ => "G2",
        };
        add_value_node(bar_node, "Clef", clef);
        add_value_node(bar_node, "Voices", list_to_string(&bar.voice_ids));
    }
}

fn save_voices<'a>(gpif: &mut XmlElement, voices: impl Iterator<Item = (&'a VoiceId, &'a Voice)>) {
    let voices_node = gpif.append_child("Voices");

    for (id, voice) in voices {
        let voice_node = voices_node.append_child("Voice");
        voice_node.set_attribute("id", id);
        add_value_node(voice_node, "Beats", list_to_string(&voice.beat_ids));
    }
}

fn save_beats<'a>(gpif: &mut XmlElement, beats: impl Iterator<Item = (&'a BeatId, &'a Beat)>) {
    let beats_node = gpif.append_child("Beats");

    for (id, beat) in beats {
        let beat_node = beats_node.append_child("Beat");
        beat_node.set_attribute("id", id);

        add_value_node(beat_node, "Notes", list_to_string(&beat.note_ids));
        beat_node
            .append_child("Rhythm")
            .set_attribute("ref", beat.rhythm_id);

        if beat.grace_note {
            add_value_node(beat_node, "GraceNotes", "BeforeBeat");
        }
    }
}

fn add_note_property<'a>(props_node: &'a mut XmlElement, name: &str) -> &'a mut XmlElement {
    let prop_node = props_node.append_child("Property");
    prop_node.set_attribute("name", name);
    prop_node
}

fn save_pitch(props_node: &mut XmlElement, name: &str, pitch: &Pitch) {
    let pitch_node = add_note_property(props_node, name).append_child("Pitch");
    add_value_node(pitch_node, "Step", pitch.note);
    add_value_node(pitch_node, "Accidental", &pitch.accidental);
    add_value_node(pitch_node, "Octave", pitch.octave);
}

fn save_notes<'a>(gpif: &mut XmlElement, notes: impl Iterator<Item = (&'a NoteId, &'a Note)>) {
    let notes_node = gpif.append_child("Notes");

    for (id, note) in notes {
        let note_node = notes_node.append_child("Note");
        note_node.set_attribute("id", id);

        let props_node = note_node.append_child("Properties");
        add_value_node(add_note_property(props_node, "String"), "String", note.string);
        add_value_node(add_note_property(props_node, "Fret"), "Fret", note.fret);

        // Guitar Pro drops notes without a pitch, and uses it for the
        // notation instead of deriving it from string and fret.
        save_pitch(props_node, "ConcertPitch", &note.concert_pitch);
        save_pitch(props_node, "TransposedPitch", &note.transposed_pitch);
    }
}

fn save_rhythms<'a>(
    gpif: &mut XmlElement,
    rhythms: impl Iterator<Item = (&'a RhythmId, &'a Rhythm)>,
) -> Result<(), ExportError> {
    let rhythms_node = gpif.append_child("Rhythms");

    for (id, rhythm) in rhythms {
        let rhythm_node = rhythms_node.append_child("Rhythm");
        rhythm_node.set_attribute("id", id);

        add_value_node(rhythm_node, "NoteValue", note_value_name(rhythm.duration)?);

        if rhythm.dots > 0 {
            rhythm_node
                .append_child("AugmentationDot")
                .set_attribute("count", rhythm.dots);
        }

        if rhythm.has_tuplet() {
            rhythm_node
                .append_child("PrimaryTuplet")
                .set_attribute("num", rhythm.tuplet_num)
                .set_attribute("den", rhythm.tuplet_denom);
        }
    }

    Ok(())
}

/// Build the GPIF tree for a document.
///
/// Id-keyed sections are written in ascending id order. Fails only when a
/// rhythm has a duration with no GPIF note value.
pub fn to_xml(doc: &Document) -> Result<XmlDocument, ExportError> {
    log::info!(
        "Exporting GPIF: {} tracks, {} master bars, {} notes",
        doc.tracks.len(),
        doc.master_bars.len(),
        doc.notes.len()
    );

    let mut gpif = XmlElement::new("GPIF");
    add_value_node(&mut gpif, "GPVersion", GP_VERSION);

    save_score_info(gpif.append_child("Score"), &doc.score_info);

    save_tracks(&mut gpif, &doc.tracks);
    save_master_bars(&mut gpif, &doc.master_bars);
    save_bars(&mut gpif, doc.bars.iter());
    save_voices(&mut gpif, doc.voices.iter());
    save_beats(&mut gpif, doc.beats.iter());
    save_notes(&mut gpif, doc.notes.iter());
    save_rhythms(&mut gpif, doc.rhythms.iter())?;

    Ok(XmlDocument::new(gpif))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_value_names() {
        assert_eq!(note_value_name(1).unwrap(), "Whole");
        assert_eq!(note_value_name(8).unwrap(), "Eighth");
        assert_eq!(note_value_name(64).unwrap(), "64th");
        assert!(matches!(
            note_value_name(128),
            Err(ExportError::UnsupportedDuration(128))
        ));
        assert!(note_value_name(3).is_err());
    }

    #[test]
    fn test_list_to_string() {
        assert_eq!(list_to_string::<i32>(&[]), "");
        assert_eq!(list_to_string(&[BarId(0), BarId(3), BarId(7)]), "0 3 7");
    }

    #[test]
    fn test_empty_document() {
        let xml = to_xml(&Document::default()).unwrap();
        let root = xml.root();
        assert_eq!(root.name(), "GPIF");

        let names: Vec<&str> = root.elements().map(XmlElement::name).collect();
        assert_eq!(
            names,
            vec![
                "GPVersion",
                "Score",
                "MasterTrack",
                "Tracks",
                "MasterBars",
                "Bars",
                "Voices",
                "Beats",
                "Notes",
                "Rhythms"
            ]
        );
        assert_eq!(root.child("GPVersion").unwrap().text(), GP_VERSION);
        assert_eq!(root.child("MasterTrack").unwrap().child("Tracks").unwrap().text(), "");
    }
}
