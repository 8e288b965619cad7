pub const DESKTOP_STYLES: &str = r#"
:root {
    /* Palette */
    --screen-bg: #000;
    --screen-text: #c0c0c0;
    --desk-bg: #8a8fb0;
    --chrome-bg: #fff;
    --chrome-text: #000;
    --chrome-border: #000;
    --highlight-bg: #000;
    --highlight-text: #fff;
    --muted-text: #808080;
    --danger: #ff0000;

    /* Metrics */
    --nav-height: 28px;
    --titlebar-height: 22px;
    --window-shadow: 2px 2px 0 #000;
    --font-pixel: "Chicago", "Geneva", "Monaco", monospace;
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    margin: 0;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    font-family: var(--font-pixel);
    background: var(--screen-bg);
    color: var(--chrome-text);
    -webkit-font-smoothing: none;
}

.yurios-root {
    position: fixed;
    inset: 0;
    overflow: hidden;
}

/* Boot */

.bios {
    position: absolute;
    inset: 0;
    padding: 2rem;
    background: var(--screen-bg);
    color: var(--screen-text);
    font-family: "Courier New", monospace;
    font-size: 1rem;
    opacity: 1;
    transition: opacity 0.1s linear;
    cursor: default;
}

.bios.exiting {
    opacity: 0;
}

.bios .text p {
    margin: 0 0 0.25rem;
}

.bios .spacer {
    height: 2em;
}

.blinking {
    animation: blink 1s steps(1, end) infinite;
}

@keyframes blink {
    50% {
        opacity: 0;
    }
}

/* Password */

.password-screen {
    position: absolute;
    inset: var(--nav-height) 0 0 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--desk-bg);
}

.input-box {
    background: var(--chrome-bg);
    border: 1px solid var(--chrome-border);
    box-shadow: var(--window-shadow);
    padding: 4px;
}

.input-box .outline {
    border: 3px double var(--chrome-border);
    padding: 1rem 1.5rem;
    min-width: 280px;
}

.password-hold {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.password-input {
    font: inherit;
    padding: 2px 4px;
    border: 1px solid var(--chrome-border);
    outline: none;
}

.password-input.error {
    border: 2px solid var(--danger);
}

#password-hint {
    margin: 0;
    font-size: 0.75rem;
    color: var(--muted-text);
    text-decoration: underline;
    cursor: pointer;
}

.password-hold button {
    align-self: flex-end;
    font: inherit;
    min-width: 64px;
    background: var(--chrome-bg);
    border: 2px solid var(--chrome-border);
    border-radius: 6px;
    cursor: pointer;
}

/* Navbar */

nav {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    z-index: 1000;
    height: var(--nav-height);
    display: flex;
    align-items: center;
    justify-content: space-between;
    background: var(--chrome-bg);
    border-bottom: 1px solid var(--chrome-border);
    user-select: none;
}

.nav-menus {
    display: flex;
    height: 100%;
    align-items: center;
}

.nav-item {
    height: 100%;
    display: flex;
    align-items: center;
    padding: 0 10px;
    cursor: pointer;
}

.nav-item:hover {
    background: var(--highlight-bg);
    color: var(--highlight-text);
}

.nav-logo img {
    width: 22px;
    height: 22px;
    image-rendering: pixelated;
}

#time {
    margin: 0 12px;
    font-size: 0.85rem;
}

.dropdown {
    position: absolute;
    top: var(--nav-height);
    z-index: 1001;
    min-width: 160px;
    background: var(--chrome-bg);
    border: 1px solid var(--chrome-border);
    box-shadow: var(--window-shadow);
}

.dropdown.banana { left: 0; }
.dropdown.file { left: 52px; }
.dropdown.edit { left: 92px; }
.dropdown.special { left: 134px; }

.dropdown ul {
    list-style: none;
    margin: 0;
    padding: 2px 0;
}

.dropdown a {
    color: inherit;
    text-decoration: none;
}

.dropdown li {
    padding: 2px 16px;
    cursor: pointer;
}

.dropdown li:hover {
    background: var(--highlight-bg);
    color: var(--highlight-text);
}

.dropdown li.unclickable {
    color: var(--muted-text);
    cursor: default;
}

.dropdown li.unclickable:hover {
    background: transparent;
    color: var(--muted-text);
}

/* Desktop */

.desktop {
    position: absolute;
    inset: var(--nav-height) 0 0 0;
    background: var(--desk-bg);
}

.desktop.with-video {
    background: transparent;
}

.desktop-canvas {
    position: absolute;
    inset: 0;
    overflow: hidden;
}

.icon {
    width: 70px;
    display: flex;
    flex-direction: column;
    align-items: center;
    user-select: none;
    cursor: pointer;
}

.desktop-icon {
    position: absolute;
    touch-action: none;
}

.icon h5 {
    margin: 4px 0 0;
    padding: 0 2px;
    font-size: 0.7rem;
    font-weight: normal;
    text-align: center;
    background: var(--chrome-bg);
    word-break: break-all;
}

.sprite-top {
    width: 36px;
    height: 36px;
    background-repeat: no-repeat;
    image-rendering: pixelated;
}

.icon:active .sprite-top {
    filter: invert(1);
}

.folder-content {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    padding: 12px;
}

/* Windows */

.floating-window {
    position: absolute;
    display: flex;
    flex-direction: column;
    min-height: 120px;
    background: var(--chrome-bg);
    border: 1px solid var(--chrome-border);
    box-shadow: var(--window-shadow);
}

.floating-window.opening {
    animation: window-open 0.3s ease-out;
}

.floating-window.closing {
    animation: window-close 0.3s ease-in forwards;
    pointer-events: none;
}

@keyframes window-open {
    from {
        opacity: 0;
        transform: scale(0.6);
    }
    to {
        opacity: 1;
        transform: scale(1);
    }
}

@keyframes window-close {
    from {
        opacity: 1;
        transform: scale(1);
    }
    to {
        opacity: 0;
        transform: scale(0.6);
    }
}

.window-titlebar {
    position: relative;
    flex: 0 0 var(--titlebar-height);
    display: flex;
    align-items: center;
    justify-content: center;
    border-bottom: 1px solid var(--chrome-border);
    background: repeating-linear-gradient(
        to bottom,
        var(--chrome-bg) 0,
        var(--chrome-bg) 2px,
        var(--chrome-border) 2px,
        var(--chrome-border) 3px
    );
    user-select: none;
    touch-action: none;
}

.window-titlebar.draggable {
    cursor: grab;
}

.floating-window:not(.active) .window-titlebar {
    background: var(--chrome-bg);
}

.window-title {
    padding: 0 8px;
    background: var(--chrome-bg);
    font-size: 0.85rem;
}

.window-close {
    position: absolute;
    left: 8px;
    width: 13px;
    height: 13px;
    padding: 0;
    background: var(--chrome-bg);
    border: 1px solid var(--chrome-border);
    cursor: pointer;
}

.window-close:active {
    background: var(--highlight-bg);
}

.window-content {
    flex: 1;
    overflow: auto;
    padding: 8px;
}

.document-viewer p {
    margin: 0 0 0.75rem;
    line-height: 1.4;
}

.frame-viewer {
    width: 100%;
    height: 100%;
    margin: -8px;
    width: calc(100% + 16px);
    height: calc(100% + 16px);
}

.frame-viewer iframe {
    display: block;
    width: 100%;
    height: 100%;
    border: none;
}

.embed-viewer {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 100%;
    height: 100%;
    padding: 20px;
}

.embed-viewer .tenor-gif-embed {
    width: 100%;
}

.unknown-viewer {
    padding: 1rem;
    color: var(--muted-text);
}

.image-viewer {
    display: flex;
    flex-direction: column;
    height: 100%;
}

.image-viewer-toolbar {
    display: flex;
    gap: 6px;
    padding-bottom: 6px;
    border-bottom: 1px solid var(--chrome-border);
}

.image-viewer-stage {
    position: relative;
    flex: 1;
    overflow: hidden;
    cursor: grab;
    touch-action: none;
}

.image-viewer-stage img {
    position: absolute;
    top: 50%;
    left: 50%;
    max-width: none;
    user-select: none;
    transform-origin: center center;
}

/* Music player */

.music-player-window .window-content {
    overflow: hidden;
}

.music-player-window.condensed {
    width: 100% !important;
}

.music-player {
    display: flex;
    flex-direction: column;
    gap: 6px;
    height: 100%;
}

.audio-visualizer {
    height: 44px;
    padding: 0;
    background: var(--chrome-bg);
    border: 1px solid var(--chrome-border);
}

.audio-visualizer canvas {
    display: block;
    width: 100%;
    height: 100%;
}

.divider {
    height: 1px;
    background: var(--chrome-border);
}

.playback-time {
    font-size: 0.8rem;
    text-align: right;
}

.song-title {
    font-size: 1rem;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.song-artist {
    font-size: 0.75rem;
    color: var(--muted-text);
}

.player-controls {
    display: flex;
    justify-content: center;
    gap: 12px;
    margin-top: auto;
}

.control-btn {
    width: 40px;
    height: 28px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--chrome-bg);
    border: 2px solid var(--chrome-border);
    border-radius: 6px;
    cursor: pointer;
}

.control-btn:active {
    background: var(--highlight-bg);
    color: var(--highlight-text);
}

.control-btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.background-video {
    position: fixed;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    z-index: 0;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.5s ease;
}

.background-video.visible {
    opacity: 1;
}

/* CRT */

.crt-overlay,
.crt-scanlines,
.crt-vignette {
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 9000;
}

.crt-overlay {
    opacity: 0.06;
    background-image: repeating-radial-gradient(
        circle at 17% 32%,
        #fff 0,
        #000 0.5px,
        #fff 1px
    );
    animation: crt-noise 0.2s steps(2) infinite;
}

.crt-scanlines {
    background: repeating-linear-gradient(
        to bottom,
        rgba(0, 0, 0, 0) 0,
        rgba(0, 0, 0, 0) 2px,
        rgba(0, 0, 0, 0.15) 3px
    );
}

.crt-vignette {
    background: radial-gradient(ellipse at center, rgba(0, 0, 0, 0) 60%, rgba(0, 0, 0, 0.45) 100%);
}

@keyframes crt-noise {
    0% { transform: translate(0, 0); }
    50% { transform: translate(-1%, 1%); }
    100% { transform: translate(1%, -1%); }
}

/* Status */

.error-state {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    background: var(--screen-bg);
    color: var(--screen-text);
    text-align: center;
}

.error-title {
    color: var(--danger);
}

.error-detail {
    font-size: 0.85rem;
}

@media (max-width: 768px) {
    #time {
        font-size: 0.7rem;
    }

    .nav-item {
        padding: 0 6px;
    }

    .dropdown.file { left: 44px; }
    .dropdown.edit { left: 78px; }
    .dropdown.special { left: 112px; }
}
"#;
