//! Fixed class names that take no parameters.
//!
//! Looked up before any generator. Keys must not collide with generator
//! families unless the static entry is meant to win (`w-full`).

use phf::phf_ordered_map;
use twgloss_core::TranslationEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticEntry {
    pub css: &'static str,
    pub description: &'static str,
}

impl StaticEntry {
    pub fn to_entry(self) -> TranslationEntry {
        TranslationEntry::new(self.css, self.description)
    }
}

macro_rules! entry {
    ($css:expr, $desc:expr) => {
        StaticEntry {
            css: $css,
            description: $desc,
        }
    };
}

pub static STATIC_ENTRIES: phf::OrderedMap<&'static str, StaticEntry> = phf_ordered_map! {
    // Display
    "block" => entry!("display: block;", "Displays the element as a block box on its own line."),
    "inline-block" => entry!("display: inline-block;", "Flows the element inline while letting it take a width and height."),
    "inline" => entry!("display: inline;", "Flows the element inline with surrounding text."),
    "flex" => entry!("display: flex;", "Makes the element a flex container."),
    "inline-flex" => entry!("display: inline-flex;", "Makes the element an inline-level flex container."),
    "grid" => entry!("display: grid;", "Makes the element a grid container."),
    "inline-grid" => entry!("display: inline-grid;", "Makes the element an inline-level grid container."),
    "table" => entry!("display: table;", "Displays the element as a table."),
    "flow-root" => entry!("display: flow-root;", "Creates a new block formatting context, containing floats."),
    "contents" => entry!("display: contents;", "Removes the element's own box so its children act as children of its parent."),
    "list-item" => entry!("display: list-item;", "Displays the element as a list item with a marker."),
    "hidden" => entry!("display: none;", "Hides the element and removes it from the layout."),

    // Position
    "static" => entry!("position: static;", "Positions the element in the normal document flow."),
    "fixed" => entry!("position: fixed;", "Positions the element relative to the viewport."),
    "absolute" => entry!("position: absolute;", "Positions the element relative to its nearest positioned ancestor."),
    "relative" => entry!("position: relative;", "Positions the element in normal flow and makes it the anchor for absolute children."),
    "sticky" => entry!("position: sticky;", "Keeps the element in flow until it reaches a scroll threshold, then sticks."),

    // Visibility
    "visible" => entry!("visibility: visible;", "Makes the element visible."),
    "invisible" => entry!("visibility: hidden;", "Hides the element but keeps its space in the layout."),
    "collapse" => entry!("visibility: collapse;", "Collapses table rows or columns as if they were hidden."),

    // Overflow
    "overflow-auto" => entry!("overflow: auto;", "Adds scrollbars only when the content overflows."),
    "overflow-hidden" => entry!("overflow: hidden;", "Clips any content that overflows the element."),
    "overflow-visible" => entry!("overflow: visible;", "Lets overflowing content render outside the element."),
    "overflow-scroll" => entry!("overflow: scroll;", "Always shows scrollbars."),
    "overflow-x-auto" => entry!("overflow-x: auto;", "Adds a horizontal scrollbar only when needed."),
    "overflow-y-auto" => entry!("overflow-y: auto;", "Adds a vertical scrollbar only when needed."),
    "overflow-x-hidden" => entry!("overflow-x: hidden;", "Clips content that overflows horizontally."),
    "overflow-y-hidden" => entry!("overflow-y: hidden;", "Clips content that overflows vertically."),

    // Flexbox
    "flex-row" => entry!("flex-direction: row;", "Lays flex items out horizontally."),
    "flex-row-reverse" => entry!("flex-direction: row-reverse;", "Lays flex items out horizontally in reverse order."),
    "flex-col" => entry!("flex-direction: column;", "Lays flex items out vertically."),
    "flex-col-reverse" => entry!("flex-direction: column-reverse;", "Lays flex items out vertically in reverse order."),
    "flex-wrap" => entry!("flex-wrap: wrap;", "Lets flex items wrap onto multiple lines."),
    "flex-wrap-reverse" => entry!("flex-wrap: wrap-reverse;", "Lets flex items wrap onto multiple lines in reverse."),
    "flex-nowrap" => entry!("flex-wrap: nowrap;", "Keeps all flex items on a single line."),

    // Alignment
    "items-start" => entry!("align-items: flex-start;", "Aligns items to the start of the cross axis."),
    "items-end" => entry!("align-items: flex-end;", "Aligns items to the end of the cross axis."),
    "items-center" => entry!("align-items: center;", "Centers items along the container's cross axis."),
    "items-baseline" => entry!("align-items: baseline;", "Aligns items along their text baselines."),
    "items-stretch" => entry!("align-items: stretch;", "Stretches items to fill the cross axis."),
    "justify-start" => entry!("justify-content: flex-start;", "Packs items toward the start of the main axis."),
    "justify-end" => entry!("justify-content: flex-end;", "Packs items toward the end of the main axis."),
    "justify-center" => entry!("justify-content: center;", "Centers items along the main axis."),
    "justify-between" => entry!("justify-content: space-between;", "Spreads items so the space between them is equal."),
    "justify-around" => entry!("justify-content: space-around;", "Spreads items with equal space around each one."),
    "justify-evenly" => entry!("justify-content: space-evenly;", "Spreads items with equal space between and around them."),
    "content-start" => entry!("align-content: flex-start;", "Packs rows toward the start of the cross axis."),
    "content-end" => entry!("align-content: flex-end;", "Packs rows toward the end of the cross axis."),
    "content-center" => entry!("align-content: center;", "Centers rows along the cross axis."),
    "content-between" => entry!("align-content: space-between;", "Spreads rows with equal space between them."),
    "content-around" => entry!("align-content: space-around;", "Spreads rows with equal space around each one."),
    "content-evenly" => entry!("align-content: space-evenly;", "Spreads rows with equal space between and around them."),
    "self-auto" => entry!("align-self: auto;", "Aligns the item according to the container's align-items."),
    "self-start" => entry!("align-self: flex-start;", "Aligns this item to the start of the cross axis."),
    "self-end" => entry!("align-self: flex-end;", "Aligns this item to the end of the cross axis."),
    "self-center" => entry!("align-self: center;", "Centers this item along the cross axis."),
    "self-stretch" => entry!("align-self: stretch;", "Stretches this item to fill the cross axis."),
    "self-baseline" => entry!("align-self: baseline;", "Aligns this item along its text baseline."),

    // Sizing
    "w-full" => entry!("width: 100%;", "Sets the width to 100%."),

    // Text
    "text-left" => entry!("text-align: left;", "Aligns text to the left."),
    "text-center" => entry!("text-align: center;", "Centers text."),
    "text-right" => entry!("text-align: right;", "Aligns text to the right."),
    "text-justify" => entry!("text-align: justify;", "Justifies text to both edges."),
    "text-start" => entry!("text-align: start;", "Aligns text to the start of the writing direction."),
    "text-end" => entry!("text-align: end;", "Aligns text to the end of the writing direction."),
    "truncate" => entry!(
        "overflow: hidden;\ntext-overflow: ellipsis;\nwhite-space: nowrap;",
        "Keeps text on one line and cuts it off with an ellipsis."
    ),
    "text-ellipsis" => entry!("text-overflow: ellipsis;", "Shows an ellipsis where overflowing text is cut off."),
    "text-clip" => entry!("text-overflow: clip;", "Cuts off overflowing text without an ellipsis."),
    "whitespace-normal" => entry!("white-space: normal;", "Collapses whitespace and wraps text normally."),
    "whitespace-nowrap" => entry!("white-space: nowrap;", "Prevents text from wrapping."),
    "whitespace-pre" => entry!("white-space: pre;", "Preserves whitespace and line breaks without wrapping."),
    "whitespace-pre-line" => entry!("white-space: pre-line;", "Preserves line breaks but collapses other whitespace."),
    "whitespace-pre-wrap" => entry!("white-space: pre-wrap;", "Preserves whitespace and line breaks, wrapping as needed."),
    "break-normal" => entry!("overflow-wrap: normal;\nword-break: normal;", "Uses the default line-breaking rules."),
    "break-words" => entry!("overflow-wrap: break-word;", "Breaks long words only when they would overflow."),
    "break-all" => entry!("word-break: break-all;", "Allows breaks between any two characters."),
    "align-top" => entry!("vertical-align: top;", "Aligns the inline element to the top of the line."),
    "align-middle" => entry!("vertical-align: middle;", "Aligns the inline element to the middle of the line."),
    "align-bottom" => entry!("vertical-align: bottom;", "Aligns the inline element to the bottom of the line."),
    "align-baseline" => entry!("vertical-align: baseline;", "Aligns the inline element to the text baseline."),
    "antialiased" => entry!(
        "-webkit-font-smoothing: antialiased;\n-moz-osx-font-smoothing: grayscale;",
        "Renders text with grayscale antialiasing."
    ),
    "subpixel-antialiased" => entry!(
        "-webkit-font-smoothing: auto;\n-moz-osx-font-smoothing: auto;",
        "Renders text with subpixel antialiasing."
    ),
    "list-none" => entry!("list-style-type: none;", "Removes list markers."),
    "list-disc" => entry!("list-style-type: disc;", "Uses bullet points as list markers."),
    "list-decimal" => entry!("list-style-type: decimal;", "Uses numbers as list markers."),
    "list-inside" => entry!("list-style-position: inside;", "Places list markers inside the list item's box."),
    "list-outside" => entry!("list-style-position: outside;", "Places list markers outside the list item's box."),

    // Literal colors
    "bg-transparent" => entry!("background-color: transparent;", "Makes the background transparent."),
    "bg-current" => entry!("background-color: currentColor;", "Uses the current text color as the background color."),
    "bg-black" => entry!("background-color: #000;", "Sets the background color to black."),
    "bg-white" => entry!("background-color: #fff;", "Sets the background color to white."),
    "text-transparent" => entry!("color: transparent;", "Makes the text transparent."),
    "text-current" => entry!("color: currentColor;", "Uses the inherited text color."),
    "text-black" => entry!("color: #000;", "Sets the text color to black."),
    "text-white" => entry!("color: #fff;", "Sets the text color to white."),
    "border-transparent" => entry!("border-color: transparent;", "Makes the border transparent."),
    "border-black" => entry!("border-color: #000;", "Sets the border color to black."),
    "border-white" => entry!("border-color: #fff;", "Sets the border color to white."),

    // Backgrounds
    "bg-cover" => entry!("background-size: cover;", "Scales the background image to cover the whole element."),
    "bg-contain" => entry!("background-size: contain;", "Scales the background image to fit inside the element."),
    "bg-center" => entry!("background-position: center;", "Centers the background image."),
    "bg-no-repeat" => entry!("background-repeat: no-repeat;", "Shows the background image only once."),
    "bg-fixed" => entry!("background-attachment: fixed;", "Fixes the background image relative to the viewport."),

    // Borders
    "border-solid" => entry!("border-style: solid;", "Draws a solid border."),
    "border-dashed" => entry!("border-style: dashed;", "Draws a dashed border."),
    "border-dotted" => entry!("border-style: dotted;", "Draws a dotted border."),
    "border-double" => entry!("border-style: double;", "Draws a double border."),
    "border-none" => entry!("border-style: none;", "Removes the border style."),
    "outline-none" => entry!(
        "outline: 2px solid transparent;\noutline-offset: 2px;",
        "Hides the default focus outline while keeping it for forced-colors mode."
    ),

    // Effects
    "shadow-sm" => entry!("box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05);", "Adds a small box shadow."),
    "shadow" => entry!(
        "box-shadow: 0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1);",
        "Adds a subtle box shadow."
    ),
    "shadow-md" => entry!(
        "box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);",
        "Adds a medium box shadow."
    ),
    "shadow-lg" => entry!(
        "box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1);",
        "Adds a large box shadow."
    ),
    "shadow-xl" => entry!(
        "box-shadow: 0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1);",
        "Adds an extra large box shadow."
    ),
    "shadow-2xl" => entry!("box-shadow: 0 25px 50px -12px rgb(0 0 0 / 0.25);", "Adds a very large box shadow."),
    "shadow-inner" => entry!("box-shadow: inset 0 2px 4px 0 rgb(0 0 0 / 0.05);", "Adds an inner shadow."),
    "shadow-none" => entry!("box-shadow: 0 0 #0000;", "Removes the box shadow."),

    // Transitions
    "transition" => entry!(
        "transition-property: color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter;\ntransition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);\ntransition-duration: 150ms;",
        "Animates changes to common visual properties over 150ms."
    ),
    "transition-all" => entry!(
        "transition-property: all;\ntransition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);\ntransition-duration: 150ms;",
        "Animates changes to every property over 150ms."
    ),
    "transition-colors" => entry!(
        "transition-property: color, background-color, border-color, text-decoration-color, fill, stroke;\ntransition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);\ntransition-duration: 150ms;",
        "Animates color changes over 150ms."
    ),
    "transition-opacity" => entry!(
        "transition-property: opacity;\ntransition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);\ntransition-duration: 150ms;",
        "Animates opacity changes over 150ms."
    ),
    "transition-none" => entry!("transition-property: none;", "Disables transitions."),

    // Interactivity
    "cursor-pointer" => entry!("cursor: pointer;", "Shows a pointing hand cursor."),
    "cursor-default" => entry!("cursor: default;", "Shows the default arrow cursor."),
    "cursor-not-allowed" => entry!("cursor: not-allowed;", "Shows a cursor indicating the action is not allowed."),
    "cursor-wait" => entry!("cursor: wait;", "Shows a busy cursor."),
    "cursor-text" => entry!("cursor: text;", "Shows a text selection cursor."),
    "cursor-move" => entry!("cursor: move;", "Shows a move cursor."),
    "select-none" => entry!("user-select: none;", "Prevents the user from selecting text."),
    "select-text" => entry!("user-select: text;", "Allows the user to select text."),
    "select-all" => entry!("user-select: all;", "Selects all text with a single click."),
    "select-auto" => entry!("user-select: auto;", "Uses the browser's default text selection behavior."),
    "pointer-events-none" => entry!("pointer-events: none;", "Lets pointer events pass through the element."),
    "pointer-events-auto" => entry!("pointer-events: auto;", "Makes the element respond to pointer events."),
    "appearance-none" => entry!("appearance: none;", "Removes native browser styling from form controls."),
    "resize" => entry!("resize: both;", "Lets the user resize the element in both directions."),
    "resize-none" => entry!("resize: none;", "Prevents the user from resizing the element."),

    // Layout misc
    "float-left" => entry!("float: left;", "Floats the element to the left of its container."),
    "float-right" => entry!("float: right;", "Floats the element to the right of its container."),
    "float-none" => entry!("float: none;", "Stops the element from floating."),
    "box-border" => entry!("box-sizing: border-box;", "Includes padding and border in the element's size."),
    "box-content" => entry!("box-sizing: content-box;", "Excludes padding and border from the element's size."),
    "isolate" => entry!("isolation: isolate;", "Creates a new stacking context."),
    "isolation-auto" => entry!("isolation: auto;", "Does not force a new stacking context."),
    "object-contain" => entry!("object-fit: contain;", "Scales replaced content to fit while keeping its aspect ratio."),
    "object-cover" => entry!("object-fit: cover;", "Scales replaced content to fill the box, cropping if needed."),
    "object-fill" => entry!("object-fit: fill;", "Stretches replaced content to fill the box."),
    "object-none" => entry!("object-fit: none;", "Shows replaced content at its natural size."),
    "object-scale-down" => entry!("object-fit: scale-down;", "Shows replaced content at its natural size or smaller."),
    "grid-flow-row" => entry!("grid-auto-flow: row;", "Places auto-positioned grid items row by row."),
    "grid-flow-col" => entry!("grid-auto-flow: column;", "Places auto-positioned grid items column by column."),
    "sr-only" => entry!(
        "position: absolute;\nwidth: 1px;\nheight: 1px;\npadding: 0;\nmargin: -1px;\noverflow: hidden;\nclip: rect(0, 0, 0, 0);\nwhite-space: nowrap;\nborder-width: 0;",
        "Hides the element visually while keeping it available to screen readers."
    ),
    "not-sr-only" => entry!(
        "position: static;\nwidth: auto;\nheight: auto;\npadding: 0;\nmargin: 0;\noverflow: visible;\nclip: auto;\nwhite-space: normal;",
        "Undoes sr-only, making the element visible again."
    ),
};

/// Exact-name lookup over [`STATIC_ENTRIES`].
#[derive(Debug, Clone, Copy)]
pub struct StaticDictionary {
    entries: &'static phf::OrderedMap<&'static str, StaticEntry>,
}

impl Default for StaticDictionary {
    fn default() -> Self {
        Self {
            entries: &STATIC_ENTRIES,
        }
    }
}

impl StaticDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-sensitive exact lookup.
    pub fn lookup(&self, class: &str) -> Option<TranslationEntry> {
        self.entries.get(class).map(|e| e.to_entry())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.entries.contains_key(class)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TranslationEntry)> + '_ {
        self.entries.entries().map(|(k, v)| (*k, v.to_entry()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
