//! Global CSS styles for Heartnote.
//!
//! Soft pastel card on a cream page, cursive headings.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAGE */
  --cream: #fcf5f2;
  --card-bg: rgba(255, 255, 255, 0.8);
  --card-border: rgba(255, 255, 255, 0.5);
  --letter-bg: #fff0f3;

  /* PASTELS */
  --blush: #f9a8d4;
  --blush-deep: #f472b6;
  --blush-soft: #fce7f3;
  --lilac: #d8b4fe;
  --lilac-deep: #c084fc;
  --lilac-soft: #f3e8ff;
  --rose: #fca5a5;
  --rose-deep: #f87171;
  --peach-soft: #ffedd5;
  --butter: #fef08a;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* Typography */
  --font-script: 'Dancing Script', cursive;
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100vh;
  background: var(--cream);
  color: var(--text-primary);
  font-family: var(--font-sans);
  user-select: none;
  overflow: hidden;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

.script { font-family: var(--font-script); }

/* === Page Layout === */
.page {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
}

.stage {
  position: relative;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 1rem;
}

/* === Backdrop Blobs === */
.backdrop-blobs {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.blob {
  position: absolute;
  width: 24rem;
  height: 24rem;
  border-radius: 9999px;
  mix-blend-mode: multiply;
  filter: blur(64px);
  opacity: 0.5;
  animation: blob 7s infinite;
}

.blob-pink { top: -10%; left: -10%; background: #fbcfe8; }
.blob-purple { top: -10%; right: -10%; background: #e9d5ff; }
.blob-yellow { bottom: -20%; left: 20%; background: var(--butter); }
.blob-delay-2 { animation-delay: 2s; }
.blob-delay-4 { animation-delay: 4s; }

@keyframes blob {
  0%   { transform: translate(0, 0) scale(1); }
  33%  { transform: translate(30px, -50px) scale(1.1); }
  66%  { transform: translate(-20px, 20px) scale(0.9); }
  100% { transform: translate(0, 0) scale(1); }
}

/* === Floating Hearts === */
.floating-hearts {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.floating-heart {
  position: absolute;
  top: 0;
  color: #fbcfe8;
  opacity: 0;
  animation-name: float-up;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
  animation-fill-mode: both;
}

@keyframes float-up {
  0%   { transform: translateY(110vh); opacity: 0; }
  50%  { opacity: 0.8; }
  100% { transform: translateY(-10vh); opacity: 0; }
}

/* === Card === */
.card {
  width: 100%;
  max-width: 24rem;
  padding: 2rem;
  border-radius: 1.5rem;
  background: var(--card-bg);
  backdrop-filter: blur(4px);
  border: 1px solid var(--card-border);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  text-align: center;
}

.motion-scale-in { animation: scale-in 400ms ease both; }
.motion-slide-in { animation: slide-in 400ms ease both; }
.motion-lift-in { animation: lift-in 400ms ease both; }

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.9); }
  to   { opacity: 1; transform: scale(1); }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(50px); }
  to   { opacity: 1; transform: translateX(0); }
}

@keyframes lift-in {
  from { opacity: 0; transform: translateY(20px); }
  to   { opacity: 1; transform: translateY(0); }
}

.card-hero {
  position: relative;
  overflow: hidden;
  margin-bottom: 1.5rem;
  padding: 1.5rem;
  border-radius: 1rem;
}

.hero-pink { background: linear-gradient(to bottom, var(--blush-soft), #fff); }
.hero-purple { background: linear-gradient(to bottom, var(--lilac-soft), #fff); padding: 2rem; }

.hero-deco { position: absolute; }
.hero-deco-left { top: 0.5rem; left: 0.5rem; color: var(--blush-deep); }
.hero-deco-right { top: 1rem; right: 1rem; color: var(--blush); }

.hero-image {
  height: 8rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.hero-image img { height: 100%; object-fit: contain; }

.card-title {
  font-size: 1.875rem;
  margin-bottom: 0.75rem;
  color: var(--text-primary);
}

.card-title.small { font-size: 1.25rem; margin-bottom: 0.25rem; }

.card-body {
  margin-bottom: 2rem;
  font-size: 0.875rem;
  line-height: 1.6;
  color: var(--text-secondary);
}

.card-body.emphasis { font-size: 1rem; font-weight: 500; }

.card-hint {
  margin-bottom: 1.5rem;
  font-size: 0.75rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--text-muted);
}

/* === Buttons === */
.btn-blush, .btn-lilac, .btn-rose {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin: 0 auto;
  padding: 0.75rem 2rem;
  border: none;
  border-radius: 9999px;
  color: #fff;
  font-weight: 500;
  cursor: pointer;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  transition: transform var(--transition-fast), background var(--transition-normal);
}

.btn-blush:active, .btn-lilac:active, .btn-rose:enabled:active { transform: scale(0.95); }

.btn-blush { background: var(--blush); }
.btn-blush:hover { background: var(--blush-deep); }
.btn-lilac { background: var(--lilac); }
.btn-lilac:hover { background: var(--lilac-deep); }

.btn-rose { width: 100%; background: var(--rose); }
.btn-rose:hover:enabled { background: var(--rose-deep); }
.btn-rose:disabled {
  background: #e5e7eb;
  color: var(--text-muted);
  cursor: not-allowed;
  box-shadow: none;
}

.btn-letter {
  position: relative;
  width: 100%;
  padding: 1.5rem 0;
  border: 2px solid var(--blush-soft);
  border-radius: 1rem;
  background: #fff;
  cursor: pointer;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  transition: transform var(--transition-fast), background var(--transition-normal);
}

.btn-letter:hover { transform: scale(1.05); background: #fdf2f8; }
.btn-letter:active { transform: scale(0.95); }
.btn-letter h3 { font-size: 1.875rem; font-weight: 400; color: #374151; }

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 2;
  display: flex;
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.5);
  color: #6b7280;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.close-btn:hover { background: #fff; }

/* === Reveal Tiles === */
.reveal-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 2rem;
}

.reveal-tile {
  position: relative;
  overflow: hidden;
  height: 4rem;
  border-radius: 1rem;
  cursor: pointer;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  transition: all var(--transition-slow);
}

.reveal-tile.hidden:hover { transform: scale(1.05); }
.reveal-tile.revealed { height: 6rem; }

.tint-orange { background: var(--peach-soft); }
.tint-pink { background: var(--blush-soft); }
.tint-purple { background: var(--lilac-soft); }

.tile-cover, .tile-message {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: opacity var(--transition-slow);
}

.tile-cover { color: #fff; }
.tile-message { padding: 1rem; opacity: 0; }
.tile-message p { font-size: 0.875rem; font-weight: 500; color: #374151; }

.reveal-tile.revealed .tile-cover { opacity: 0; }
.reveal-tile.revealed .tile-message { opacity: 1; transition-delay: 100ms; }

/* === Finale === */
.portraits {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 2rem;
}

.portrait {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 6rem;
  height: 6rem;
  overflow: hidden;
  border-radius: 1rem;
  box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
}

.portrait img { width: 5rem; }
.portrait-purple { background: var(--lilac-soft); }
.portrait-pink { background: var(--blush-soft); }

/* === Letter Overlay === */
.letter-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: flex-end;
  justify-content: center;
}

@media (min-width: 640px) {
  .letter-overlay { align-items: center; }
}

.letter-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.2);
  animation: fade-in 300ms ease both;
}

.letter-panel {
  position: relative;
  width: 100%;
  max-width: 28rem;
  max-height: 90vh;
  overflow-y: auto;
  border-radius: 1.5rem 1.5rem 0 0;
  background: var(--letter-bg);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  animation: slide-up 450ms cubic-bezier(0.22, 1, 0.36, 1) both;
}

@keyframes fade-in {
  from { opacity: 0; }
  to   { opacity: 1; }
}

@keyframes slide-up {
  from { transform: translateY(100%); }
  to   { transform: translateY(0); }
}

.corner {
  position: absolute;
  width: 8rem;
  height: 8rem;
  opacity: 0.2;
  pointer-events: none;
}

.corner-top { top: 0; left: 0; background: #fbcfe8; border-bottom-right-radius: 9999px; }
.corner-bottom { bottom: 0; right: 0; background: #e9d5ff; border-top-left-radius: 9999px; }

.letter-body {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 2rem;
}

.letter-title {
  font-size: 2.25rem;
  margin-bottom: 1.5rem;
  color: var(--text-primary);
}

.letter-text {
  margin-bottom: 2rem;
  font-size: 0.875rem;
  line-height: 1.7;
  text-align: justify;
  color: var(--text-secondary);
}

.letter-text p { margin-bottom: 1rem; }
.letter-closing { font-weight: 600; color: var(--text-primary); }

/* === Memory Gallery === */
.memory-gallery {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  width: 100%;
}

.gallery-title {
  margin-bottom: 0.5rem;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-align: center;
  text-transform: uppercase;
  color: var(--text-muted);
}

.memory {
  padding: 0.5rem;
  border-radius: 0.75rem;
  background: #fff;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  transition: transform var(--transition-normal);
}

.tilt-right { transform: rotate(1deg); }
.tilt-left { transform: rotate(-1deg); }
.memory:hover { transform: rotate(0); }

.memory-photo {
  width: 100%;
  height: 10rem;
  object-fit: cover;
  border-radius: 0.5rem;
}

.memory-video {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  height: 10rem;
  overflow: hidden;
  border-radius: 0.5rem;
  background: #f3f4f6;
  cursor: pointer;
}

.memory-video img {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.8;
  transition: transform var(--transition-normal);
}

.memory-video:hover img { transform: scale(1.1); }

.play-badge {
  position: relative;
  z-index: 1;
  display: flex;
  padding: 0.75rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.3);
  backdrop-filter: blur(12px);
  color: #fff;
}

.memory-caption {
  margin-top: 0.5rem;
  font-size: 10px;
  text-align: center;
  color: var(--text-muted);
}
"#;
