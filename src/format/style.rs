//! Embedded stylesheet for the rendered comment.

/// Dark-theme styles scoped under `.ai-analysis-report`. Shipped inline so
/// the stored comment body renders the same wherever it is embedded.
pub const CSS_STYLES: &str = r#"
.ai-analysis-report {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
    line-height: 1.7;
    background-color: #1e1e1e;
    color: #d4d4d4;
    border: 1px solid #404040;
    border-radius: 12px;
    padding: 2rem;
    margin-top: 1rem;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
}

.section-header {
    display: flex;
    align-items: center;
    gap: 12px;
    padding-bottom: 12px;
    margin: 24px 0 16px 0;
    border-bottom: 2px solid #404040;
}

.section-emoji {
    font-size: 1.6rem;
    line-height: 1;
}

.section-title {
    margin: 0;
    font-size: 1.4rem;
    color: #ffffff;
    font-weight: 600;
}

.ai-content-body ul, .ai-content-body ol {
    padding-left: 25px;
}

.ai-content-body li {
    margin-bottom: 0.8rem;
}

.ai-content-body strong {
    color: #ffffff;
    font-weight: 600;
}

.ai-content-body a {
    color: #4e94ce;
    text-decoration: none;
}

.ai-content-body a:hover {
    text-decoration: underline;
}

.ai-content-body p code, .ai-content-body li code {
    font-family: 'SF Mono', 'Monaco', 'Inconsolata', 'Roboto Mono', monospace;
    color: #ce9178;
    background-color: rgba(110, 118, 129, 0.2);
    padding: 2px 6px;
    border-radius: 4px;
    font-size: 0.9em;
    border: 1px solid rgba(110, 118, 129, 0.3);
}

.code-block-container {
    border-radius: 12px;
    overflow: hidden;
    margin: 2rem 0;
    border: 1px solid #404040;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2);
    background: #2d2d2d;
}

.code-header {
    background: linear-gradient(180deg, #3c3c3c 0%, #2d2d2d 100%);
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 16px;
    border-bottom: 1px solid #404040;
    position: relative;
}

.header-dots {
    display: flex;
    align-items: center;
    gap: 8px;
}

.dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
}

.dot.red { background: #ff5f56; }
.dot.yellow { background: #ffbd2e; }
.dot.green { background: #27c93f; }

.code-language {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
    color: #a0a0a0;
    font-weight: 600;
    font-size: 0.75rem;
    letter-spacing: 1px;
    text-transform: uppercase;
}

.header-buttons {
    display: flex;
    align-items: center;
    gap: 8px;
}

.copy-btn, .run-btn {
    display: flex;
    align-items: center;
    gap: 6px;
    padding: 6px 12px;
    border: none;
    border-radius: 6px;
    font-size: 0.8rem;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s ease;
}

.copy-btn {
    background-color: #0066cc;
    color: white;
}

.copy-btn:hover {
    background-color: #0052a3;
    transform: translateY(-1px);
}

.run-btn {
    background-color: #28a745;
    color: white;
}

.run-btn:hover {
    background-color: #218838;
    transform: translateY(-1px);
}

.copy-btn.copied {
    background-color: #28a745;
}

.run-btn.running {
    background-color: #ffc107;
    color: #212529;
}

.btn-icon {
    line-height: 1;
    font-size: 0.9em;
}

.btn-text {
    font-weight: 500;
}

.ai-analysis-report pre {
    background: #1e1e1e;
    color: #d4d4d4;
    margin: 0;
    padding: 1.5rem;
    white-space: pre-wrap;
    word-wrap: break-word;
    font-family: 'SF Mono', 'Monaco', 'Inconsolata', 'Roboto Mono', monospace;
    font-size: 14px;
    line-height: 1.6;
    overflow-x: auto;
}

.ai-analysis-report pre code {
    font-family: inherit;
    color: inherit;
    background-color: transparent;
    padding: 0;
    font-size: inherit;
    border: none;
}

@media (max-width: 768px) {
    .ai-analysis-report {
        padding: 1.5rem;
    }

    .code-header {
        padding: 10px 12px;
    }

    .copy-btn, .run-btn {
        padding: 5px 10px;
        font-size: 0.75rem;
    }

    .ai-analysis-report pre {
        padding: 1rem;
        font-size: 13px;
    }
}
"#;
